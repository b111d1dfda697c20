//! Sampled output values.

/// One point of a sampled temperature curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialSample {
    /// Position along the bar.
    pub x: f64,
    /// Temperature at `x`.
    pub u: f64,
}

impl SpatialSample {
    /// Pair a coordinate with its value.
    pub fn new(x: f64, u: f64) -> Self {
        Self { x, u }
    }
}

/// Coefficient of eigenmode `n >= 1` in a finite-bar expansion.
///
/// The Neumann constant mode is kept separately on the series, not as a
/// coefficient with `n = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourierCoefficient {
    /// Mode index.
    pub n: u32,
    /// Projection of the initial condition onto the mode.
    pub value: f64,
}
