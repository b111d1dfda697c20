//! The [`BarSolver`] trait shared by both domain configurations.

use calor_core::{ParamError, SimulationParameters};
use calor_space::Interval;

/// Pointwise evaluator of `u(x, t)` for one domain configuration.
///
/// # Contract
///
/// - `solve()` is a pure function of its arguments: no caching, no
///   interior mutability, identical inputs give identical output.
/// - `t == 0` returns the initial profile exactly.
/// - Invalid `t` or parameters yield `Err`, never NaN.
///
/// # Object safety
///
/// This trait is object-safe; the sampler selects a `&dyn BarSolver`
/// per [`BarType`](calor_core::BarType).
pub trait BarSolver: Send + Sync {
    /// Human-readable name for logs and metrics.
    fn name(&self) -> &str;

    /// Temperature at position `x` and time `t`.
    fn solve(&self, x: f64, t: f64, params: &SimulationParameters) -> Result<f64, ParamError>;

    /// Quadrature nodes visited by one `solve()` call at time `t`.
    fn quadrature_cost(&self, t: f64, params: &SimulationParameters) -> usize;
}

/// Reject negative or non-finite times.
pub fn check_time(t: f64) -> Result<(), ParamError> {
    if !(t >= 0.0) || !t.is_finite() {
        return Err(ParamError::InvalidTime { value: t });
    }
    Ok(())
}

/// Build `[start, end]`, reporting a degenerate range as a bad length.
pub(crate) fn interval_for(start: f64, end: f64, length: f64) -> Result<Interval, ParamError> {
    Interval::new(start, end).map_err(|_| ParamError::NonPositiveLength { value: length })
}
