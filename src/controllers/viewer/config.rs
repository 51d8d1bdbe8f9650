use crate::core::data::complex::Complex;
use crate::core::fractals::julia::params::{
    DEFAULT_CONSTANT, DEFAULT_DISPLACEMENT_STEP, JuliaParams,
};
use crate::core::fractals::julia::render_params::{
    DEFAULT_ESCAPE_THRESHOLD, DEFAULT_MAX_ITERATIONS,
};
use crate::core::palette::kinds::PaletteKinds;
use std::error::Error;
use std::fmt;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingSeparator { argument: String },
    UnknownKey { key: String },
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { argument } => {
                write!(f, "expected key=value, got '{}'", argument)
            }
            Self::UnknownKey { key } => {
                write!(f, "unknown configuration key '{}'", key)
            }
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for configuration key '{}'", value, key)
            }
        }
    }
}

impl Error for ConfigError {}

/// Startup configuration. Every override is independently optional; an
/// absent key keeps its default, a malformed value refuses startup rather
/// than silently rendering something else.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub escape_threshold: f32,
    pub constant: Complex,
    pub displacement_step: Complex,
    pub palette_kind: PaletteKinds,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
            constant: DEFAULT_CONSTANT,
            displacement_step: DEFAULT_DISPLACEMENT_STEP,
            palette_kind: PaletteKinds::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses `key=value` overrides, e.g.
    /// `width=800 height=600 constant=-0.7,0.27 palette=fire`.
    pub fn from_key_value_args(
        args: impl IntoIterator<Item = String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for argument in args {
            let (key, value) =
                argument
                    .split_once('=')
                    .ok_or_else(|| ConfigError::MissingSeparator {
                        argument: argument.clone(),
                    })?;

            match key {
                "width" => config.width = parse_number(key, value)?,
                "height" => config.height = parse_number(key, value)?,
                "max-iterations" => config.max_iterations = parse_number(key, value)?,
                "escape-threshold" => config.escape_threshold = parse_number(key, value)?,
                "constant" => config.constant = parse_complex(key, value)?,
                "step" => config.displacement_step = parse_complex(key, value)?,
                "palette" => config.palette_kind = parse_palette(key, value)?,
                _ => {
                    return Err(ConfigError::UnknownKey {
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(config)
    }

    #[must_use]
    pub fn julia_params(&self) -> JuliaParams {
        JuliaParams {
            constant: self.constant,
            displacement_step: self.displacement_step,
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_complex(key: &str, value: &str) -> Result<Complex, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };

    let (real, imag) = value.split_once(',').ok_or_else(invalid)?;

    Ok(Complex {
        real: real.trim().parse().map_err(|_| invalid())?,
        imag: imag.trim().parse().map_err(|_| invalid())?,
    })
}

fn parse_palette(key: &str, value: &str) -> Result<PaletteKinds, ConfigError> {
    match value {
        "greyscale" => Ok(PaletteKinds::Greyscale),
        "fire" => Ok(PaletteKinds::FireGradient),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
