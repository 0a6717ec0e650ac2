use std::error::Error;
use std::fmt;

/// Invalid arguments rejected by the integrator before any stepping happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegratorError {
    /// State dimension must be at least 1.
    InvalidDimension { size: usize },
    /// Step size must be finite and strictly positive.
    InvalidStep { dt: f64 },
    /// Horizon must be finite and non-negative.
    InvalidHorizon { t_end: f64 },
    /// `round(t_end / dt) + 1` rows would not fit in an addressable buffer.
    TooManySteps { t_end: f64, dt: f64 },
    /// Initial state length does not match the integrator dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for IntegratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { size } => {
                write!(f, "invalid state dimension {size}: must be at least 1")
            }
            Self::InvalidStep { dt } => {
                write!(f, "invalid step size {dt}: must be finite and > 0")
            }
            Self::InvalidHorizon { t_end } => {
                write!(f, "invalid horizon {t_end}: must be finite and >= 0")
            }
            Self::TooManySteps { t_end, dt } => write!(
                f,
                "horizon {t_end} with step {dt} needs more rows than can be allocated"
            ),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "initial state has {actual} elements, integrator expects {expected}"
            ),
        }
    }
}

impl Error for IntegratorError {}
