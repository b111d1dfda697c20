//! Error types for parameter validation and solution sampling.
//!
//! Every failure is deterministic given its inputs. Invalid input is
//! rejected before any solver runs, so callers never receive NaN or a
//! partially computed curve.

use std::error::Error;
use std::fmt;

/// A parameter value rejected during validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// Bar length `L` is zero, negative, or not finite.
    NonPositiveLength {
        /// The rejected length.
        value: f64,
    },
    /// Thermal diffusivity `α` is zero, negative, or not finite.
    NonPositiveDiffusivity {
        /// The rejected diffusivity.
        value: f64,
    },
    /// A sample was requested with fewer than one point.
    TooFewPoints {
        /// The requested point count.
        requested: usize,
    },
    /// Time is negative or not finite.
    InvalidTime {
        /// The rejected time.
        value: f64,
    },
    /// A spatial coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// The rejected coordinate.
        value: f64,
    },
    /// A quadrature point count or mode count is zero.
    InvalidResolution {
        /// Name of the offending resolution field.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// A string key did not name any variant of a configuration enum.
    UnknownVariant {
        /// The enum being parsed, e.g. `"boundary condition"`.
        kind: &'static str,
        /// The unrecognized input.
        value: String,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLength { value } => {
                write!(f, "length must be finite and > 0, got {value}")
            }
            Self::NonPositiveDiffusivity { value } => {
                write!(f, "diffusivity must be finite and > 0, got {value}")
            }
            Self::TooFewPoints { requested } => {
                write!(f, "at least 1 sample point required, got {requested}")
            }
            Self::InvalidTime { value } => {
                write!(f, "time must be finite and >= 0, got {value}")
            }
            Self::NonFiniteCoordinate { value } => {
                write!(f, "coordinate must be finite, got {value}")
            }
            Self::InvalidResolution { name, value } => {
                write!(f, "{name} must be at least 1, got {value}")
            }
            Self::UnknownVariant { kind, value } => {
                write!(f, "unknown {kind} '{value}'")
            }
        }
    }
}

impl Error for ParamError {}

/// Errors returned by solution sampling and overlay evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// An input failed validation; no solver was run.
    InvalidParameter(ParamError),
    /// A solver produced NaN or an infinity (finite-output sentinel).
    NonFinite {
        /// Coordinate of the first offending sample.
        x: f64,
        /// Time of the evaluation.
        t: f64,
        /// The non-finite value.
        value: f64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(e) => write!(f, "invalid parameter: {e}"),
            Self::NonFinite { x, t, value } => {
                write!(f, "non-finite solution {value} at x={x}, t={t}")
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidParameter(e) => Some(e),
            Self::NonFinite { .. } => None,
        }
    }
}

impl From<ParamError> for SolveError {
    fn from(e: ParamError) -> Self {
        Self::InvalidParameter(e)
    }
}
