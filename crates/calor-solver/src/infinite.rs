//! Infinite-bar solver: convolution of the initial profile with the
//! heat kernel.

use calor_core::{ParamError, Resolution, SimulationParameters};
use calor_space::{Interval, LeftRiemann};

use crate::initial;
use crate::kernel::heat_kernel;
use crate::solver::{check_time, interval_for, BarSolver};

/// Solves `u(x, t) = ∫ f(ξ) G(x - ξ, t, α) dξ` on the real line.
///
/// The integral is a left Riemann sum over `ξ ∈ [-L/2, 3L/2]` with a
/// fixed number of subintervals. The window reaches past both ends of
/// the visualized bar `[0, L]` so heat that spreads beyond it is still
/// counted.
#[derive(Clone, Debug)]
pub struct InfiniteBarSolver {
    convolution_points: usize,
}

impl InfiniteBarSolver {
    /// Create a solver using `resolution.convolution_points`.
    ///
    /// Returns `Err(ParamError::InvalidResolution)` if the count is zero.
    pub fn new(resolution: &Resolution) -> Result<Self, ParamError> {
        resolution.validate()?;
        Ok(Self {
            convolution_points: resolution.convolution_points,
        })
    }

    /// Subintervals in the convolution sum.
    pub fn convolution_points(&self) -> usize {
        self.convolution_points
    }

    /// Integration window `[-L/2, 3L/2]` for a bar of length `length`.
    pub fn window(length: f64) -> Result<Interval, ParamError> {
        interval_for(-0.5 * length, 1.5 * length, length)
    }

    fn convolve(&self, x: f64, t: f64, params: &SimulationParameters) -> Result<f64, ParamError> {
        let rule = LeftRiemann::new(Self::window(params.length)?, self.convolution_points).map_err(
            |_| ParamError::InvalidResolution {
                name: "convolution_points",
                value: self.convolution_points,
            },
        )?;
        let alpha = params.diffusivity;
        Ok(rule.integrate(|xi| initial::evaluate(xi, params) * heat_kernel(x - xi, t, alpha)))
    }
}

impl Default for InfiniteBarSolver {
    fn default() -> Self {
        Self {
            convolution_points: Resolution::default().convolution_points,
        }
    }
}

impl BarSolver for InfiniteBarSolver {
    fn name(&self) -> &str {
        "InfiniteBar"
    }

    fn solve(&self, x: f64, t: f64, params: &SimulationParameters) -> Result<f64, ParamError> {
        check_time(t)?;
        params.validate()?;
        if t == 0.0 {
            return Ok(initial::evaluate(x, params));
        }
        self.convolve(x, t, params)
    }

    fn quadrature_cost(&self, t: f64, _params: &SimulationParameters) -> usize {
        if t == 0.0 {
            0
        } else {
            self.convolution_points
        }
    }
}
