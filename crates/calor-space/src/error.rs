//! Error types for interval, grid and quadrature construction.

use std::fmt;

/// Errors arising from building spatial support types.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// `start >= end`, or an endpoint is not finite.
    DegenerateInterval {
        /// Requested lower bound.
        start: f64,
        /// Requested upper bound.
        end: f64,
    },
    /// A grid was requested with zero points.
    EmptyGrid,
    /// A quadrature rule was requested with zero subintervals.
    NoSubintervals,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateInterval { start, end } => {
                write!(f, "interval [{start}, {end}] must be finite with start < end")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one point"),
            Self::NoSubintervals => write!(f, "quadrature needs at least one subinterval"),
        }
    }
}

impl std::error::Error for SpaceError {}
