//! Construction-time validation errors.
//!
//! The simulation step itself never fails; these are reported by the
//! `validate` methods on the config types before a scene is built.

use std::fmt;

/// A config value that would break the simulation's invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Mass must be positive and finite.
    InvalidMass(f32),
    /// Stiffness must be positive.
    InvalidStiffness(f32),
    /// Rest length (or lattice spacing) must be non-negative.
    InvalidRestLength(f32),
    /// Damping must lie in [0, 1].
    InvalidDamping(f32),
    /// The lattice needs at least one particle.
    InvalidGridDimensions { width: usize, height: usize },
    /// The cull rectangle has no area.
    InvalidBounds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMass(m) => write!(f, "mass must be positive and finite (got {})", m),
            ConfigError::InvalidStiffness(k) => write!(f, "stiffness must be positive (got {})", k),
            ConfigError::InvalidRestLength(l) => {
                write!(f, "rest length must be non-negative (got {})", l)
            }
            ConfigError::InvalidDamping(d) => write!(f, "damping must be in [0, 1] (got {})", d),
            ConfigError::InvalidGridDimensions { width, height } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", width, height)
            }
            ConfigError::InvalidBounds => write!(f, "cull bounds must have a positive area"),
        }
    }
}

impl std::error::Error for ConfigError {}
