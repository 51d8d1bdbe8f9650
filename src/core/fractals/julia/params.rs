use crate::core::data::complex::Complex;

pub const DEFAULT_CONSTANT: Complex = Complex {
    real: 0.355534,
    imag: -0.337292,
};

pub const DEFAULT_DISPLACEMENT_STEP: Complex = Complex {
    real: 0.001,
    imag: 0.001,
};

/// The Julia constant `c` of `z ← z² + c` plus the per-keypress increment
/// applied to one of its components at a time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    pub constant: Complex,
    pub displacement_step: Complex,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            constant: DEFAULT_CONSTANT,
            displacement_step: DEFAULT_DISPLACEMENT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constant_is_the_documented_seed() {
        let params = JuliaParams::default();

        assert_eq!(params.constant.real, 0.355534);
        assert_eq!(params.constant.imag, -0.337292);
    }

    #[test]
    fn default_displacement_step_is_uniform() {
        let params = JuliaParams::default();

        assert_eq!(params.displacement_step.real, params.displacement_step.imag);
        assert!(params.displacement_step.real > 0.0);
    }
}
