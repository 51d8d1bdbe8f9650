use crate::core::data::complex::Complex;

/// The complex-plane point at the image center plus the zoom factor.
///
/// `scale` stays positive: the only mutations are the controller's
/// multiplicative zoom commands. Larger values show a wider region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub pan: Complex,
    pub scale: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: Complex::ZERO,
            scale: 1.0,
        }
    }
}
