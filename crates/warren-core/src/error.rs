//! Configuration validation errors.

use std::error::Error;
use std::fmt;

/// A scalar configuration parameter violated its static constraint.
///
/// Raised by [`GridConfigBuilder::build`](crate::GridConfigBuilder::build)
/// before any generation attempt; deterministic for a given input.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `size` is below the minimum side length.
    SizeTooSmall {
        /// The rejected value.
        size: u32,
        /// Minimum accepted side length.
        min: u32,
    },
    /// `size` exceeds the maximum side length.
    SizeTooLarge {
        /// The rejected value.
        size: u32,
        /// Maximum accepted side length.
        max: u32,
    },
    /// `density` is not a finite value in `[0, 1]`.
    DensityOutOfRange {
        /// The rejected value.
        density: f64,
    },
    /// `obs_radius` exceeds the maximum padding width.
    ObsRadiusTooLarge {
        /// The rejected value.
        obs_radius: u32,
        /// Maximum accepted radius.
        max: u32,
    },
    /// `num_agents` is zero.
    NoAgents,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeTooSmall { size, min } => {
                write!(f, "size must be at least {min}, got {size}")
            }
            Self::SizeTooLarge { size, max } => {
                write!(f, "size must be at most {max}, got {size}")
            }
            Self::DensityOutOfRange { density } => {
                write!(f, "density must be a finite value in [0, 1], got {density}")
            }
            Self::ObsRadiusTooLarge { obs_radius, max } => {
                write!(f, "obs_radius must be at most {max}, got {obs_radius}")
            }
            Self::NoAgents => write!(f, "num_agents must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
