use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

// Squared-radius bound, radius ≈ 31.6. Deliberately much larger than the
// mathematically minimal escape radius of 2.
pub const DEFAULT_ESCAPE_THRESHOLD: f32 = 1000.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderParamsError {
    ZeroMaxIterations,
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "max iterations must be greater than zero")
            }
        }
    }
}

impl Error for RenderParamsError {}

/// Iteration budget and escape bound, fixed for the process lifetime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    max_iterations: u32,
    escape_threshold: f32,
}

impl RenderParams {
    pub fn new(max_iterations: u32, escape_threshold: f32) -> Result<Self, RenderParamsError> {
        if max_iterations == 0 {
            return Err(RenderParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            escape_threshold,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f32 {
        self.escape_threshold
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
        }
    }
}
