//! [`SolutionSampler`]: validated, per-tick sampling of `u(x, t)`.

use std::time::Instant;

use calor_core::{BarType, ParamError, SimulationParameters, SolveError, SpatialSample};
use calor_solver::solver::check_time;
use calor_solver::{heat_kernel, initial, BarSolver, FiniteBarSolver, InfiniteBarSolver};
use calor_space::{Interval, UniformGrid};

use crate::config::{ConfigError, SamplerConfig};
use crate::metrics::SampleMetrics;

/// One redraw's worth of output: the solution curve, both reference
/// overlays on the same grid, and timing.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleFrame {
    /// Time the frame was evaluated at.
    pub t: f64,
    /// `u(x, t)` at every grid point, `x` ascending over `[0, L]`.
    pub solution: Vec<SpatialSample>,
    /// The initial condition on the same grid.
    pub initial: Vec<SpatialSample>,
    /// The heat kernel centered at `L/2`; `None` unless the bar is
    /// infinite and `t > 0`.
    pub kernel: Option<Vec<SpatialSample>>,
    /// Work and timing counters.
    pub metrics: SampleMetrics,
}

/// Dispatches sampling requests to the solver matching the bar type.
///
/// Every public method validates its inputs first and is a pure function
/// of its arguments: nothing is cached between calls, so repeated calls
/// with unchanged parameters redo all quadratures.
///
/// # Examples
///
/// ```
/// use calor_core::{BarType, BoundaryCondition, SimulationParameters};
/// use calor_engine::SolutionSampler;
///
/// let sampler = SolutionSampler::default();
/// let params = SimulationParameters::builder()
///     .bar_type(BarType::Finite)
///     .boundary_condition(BoundaryCondition::Dirichlet)
///     .build()
///     .unwrap();
///
/// let curve = sampler.sample(0.0, 3, &params).unwrap();
/// assert_eq!(curve[1].x, 5.0);
/// assert!((curve[1].u - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct SolutionSampler {
    config: SamplerConfig,
    infinite: InfiniteBarSolver,
    finite: FiniteBarSolver,
}

impl SolutionSampler {
    /// Build a sampler from a validated configuration.
    pub fn new(config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let infinite = InfiniteBarSolver::new(&config.resolution)?;
        let finite = FiniteBarSolver::new(&config.resolution)?;
        Ok(Self {
            config,
            infinite,
            finite,
        })
    }

    /// The configuration this sampler was built with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The solver used for `bar`.
    pub fn solver_for(&self, bar: BarType) -> &dyn BarSolver {
        match bar {
            BarType::Infinite => &self.infinite,
            BarType::Finite => &self.finite,
        }
    }

    /// Sample `u(x, t)` at `num_points` evenly spaced `x` over `[0, L]`.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidParameter`] if `num_points == 0`, `t` is
    /// negative or not finite, or the parameters fail validation.
    /// [`SolveError::NonFinite`] if the finite-output check is enabled and
    /// a solver produced NaN or an infinity.
    pub fn sample(
        &self,
        t: f64,
        num_points: usize,
        params: &SimulationParameters,
    ) -> Result<Vec<SpatialSample>, SolveError> {
        let grid = validate_request(t, num_points, params)?;
        let solver = self.solver_for(params.bar_type);
        self.solve_on(solver, &grid, t, params)
    }

    /// [`sample`](Self::sample) with the configured default point count.
    pub fn sample_default(
        &self,
        t: f64,
        params: &SimulationParameters,
    ) -> Result<Vec<SpatialSample>, SolveError> {
        self.sample(t, self.config.default_points, params)
    }

    /// The initial condition at `x`, including Dirichlet post-processing
    /// on finite bars.
    pub fn evaluate_initial_condition(
        &self,
        x: f64,
        params: &SimulationParameters,
    ) -> Result<f64, SolveError> {
        check_coordinate(x)?;
        params.validate()?;
        Ok(initial::evaluate(x, params))
    }

    /// The heat kernel `G(x - L/2, t, α)` as a reference overlay.
    ///
    /// Returns `Ok(None)` when the overlay has no meaning: on a finite
    /// bar, or at `t = 0`.
    pub fn evaluate_heat_kernel(
        &self,
        x: f64,
        t: f64,
        params: &SimulationParameters,
    ) -> Result<Option<f64>, SolveError> {
        check_coordinate(x)?;
        check_time(t)?;
        params.validate()?;
        if !shows_kernel(t, params) {
            return Ok(None);
        }
        Ok(Some(heat_kernel(x - params.center(), t, params.diffusivity)))
    }

    /// Solution curve plus both overlays on one grid, with metrics.
    pub fn sample_frame(
        &self,
        t: f64,
        num_points: usize,
        params: &SimulationParameters,
    ) -> Result<SampleFrame, SolveError> {
        let start = Instant::now();
        let grid = validate_request(t, num_points, params)?;
        let solver = self.solver_for(params.bar_type);

        let solve_start = Instant::now();
        let solution = self.solve_on(solver, &grid, t, params)?;
        let solve_us = solve_start.elapsed().as_micros() as u64;

        let initial = grid.sample(|x| initial::evaluate(x, params));
        let kernel = shows_kernel(t, params).then(|| {
            let c = params.center();
            grid.sample(|x| heat_kernel(x - c, t, params.diffusivity))
        });

        let metrics = SampleMetrics {
            total_us: start.elapsed().as_micros() as u64,
            solve_us,
            points: grid.len(),
            solver: solver.name().to_string(),
            quadrature_nodes: (grid.len() * solver.quadrature_cost(t, params)) as u64,
        };
        log::debug!(
            "frame t={t} bar={} ic={} bc={} points={} solver={} total_us={}",
            params.bar_type,
            params.initial_condition,
            params.boundary_condition,
            metrics.points,
            metrics.solver,
            metrics.total_us,
        );

        Ok(SampleFrame {
            t,
            solution,
            initial,
            kernel,
            metrics,
        })
    }

    fn solve_on(
        &self,
        solver: &dyn BarSolver,
        grid: &UniformGrid,
        t: f64,
        params: &SimulationParameters,
    ) -> Result<Vec<SpatialSample>, SolveError> {
        grid.try_sample(|x| -> Result<f64, SolveError> {
            let u = solver.solve(x, t, params)?;
            if self.config.check_finite && !u.is_finite() {
                log::warn!(
                    "{} produced non-finite value {u} at x={x}, t={t}",
                    solver.name()
                );
                return Err(SolveError::NonFinite { x, t, value: u });
            }
            Ok(u)
        })
    }
}

impl Default for SolutionSampler {
    fn default() -> Self {
        Self {
            config: SamplerConfig::default(),
            infinite: InfiniteBarSolver::default(),
            finite: FiniteBarSolver::default(),
        }
    }
}

/// Kernel overlay is drawn only for the infinite bar after `t = 0`.
fn shows_kernel(t: f64, params: &SimulationParameters) -> bool {
    params.bar_type == BarType::Infinite && t > 0.0
}

fn check_coordinate(x: f64) -> Result<(), ParamError> {
    if !x.is_finite() {
        return Err(ParamError::NonFiniteCoordinate { value: x });
    }
    Ok(())
}

/// Validate a sampling request and build the grid over `[0, L]`.
fn validate_request(
    t: f64,
    num_points: usize,
    params: &SimulationParameters,
) -> Result<UniformGrid, ParamError> {
    if num_points == 0 {
        return Err(ParamError::TooFewPoints {
            requested: num_points,
        });
    }
    check_time(t)?;
    params.validate()?;
    let bar = Interval::new(0.0, params.length).map_err(|_| ParamError::NonPositiveLength {
        value: params.length,
    })?;
    UniformGrid::new(bar, num_points).map_err(|_| ParamError::TooFewPoints {
        requested: num_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calor_core::{BoundaryCondition, InitialCondition, Resolution};
    use calor_test_utils::{finite_params, infinite_params, reference_params};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn sampler_is_shareable() {
        assert_send_sync::<SolutionSampler>();
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = SamplerConfig {
            resolution: Resolution {
                coefficient_points: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            SolutionSampler::new(cfg),
            Err(ConfigError::Resolution(_))
        ));
    }

    #[test]
    fn dispatch_follows_bar_type() {
        let s = SolutionSampler::default();
        assert_eq!(s.solver_for(BarType::Infinite).name(), "InfiniteBar");
        assert_eq!(s.solver_for(BarType::Finite).name(), "FiniteBar");
    }

    #[test]
    fn sample_length_and_order() {
        let s = SolutionSampler::default();
        let curve = s.sample(1.0, 64, &reference_params()).unwrap();
        assert_eq!(curve.len(), 64);
        assert_eq!(curve[0].x, 0.0);
        assert_eq!(curve[63].x, 10.0);
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn sample_default_uses_configured_points() {
        let s = SolutionSampler::new(SamplerConfig {
            default_points: 17,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.sample_default(0.0, &reference_params()).unwrap().len(), 17);
        assert_eq!(
            SolutionSampler::default()
                .sample_default(0.0, &reference_params())
                .unwrap()
                .len(),
            500
        );
    }

    #[test]
    fn zero_points_rejected_before_solving() {
        let s = SolutionSampler::default();
        assert_eq!(
            s.sample(1.0, 0, &reference_params()),
            Err(SolveError::InvalidParameter(ParamError::TooFewPoints {
                requested: 0
            }))
        );
    }

    #[test]
    fn invalid_length_and_time_rejected() {
        let s = SolutionSampler::default();
        let bad = SimulationParameters {
            length: -1.0,
            ..reference_params()
        };
        assert!(matches!(
            s.sample(1.0, 10, &bad),
            Err(SolveError::InvalidParameter(ParamError::NonPositiveLength { .. }))
        ));
        assert!(matches!(
            s.sample(f64::NAN, 10, &reference_params()),
            Err(SolveError::InvalidParameter(ParamError::InvalidTime { .. }))
        ));
    }

    #[test]
    fn kernel_overlay_only_for_infinite_bar_after_start() {
        let s = SolutionSampler::default();
        let inf = infinite_params(InitialCondition::Gaussian);
        let fin = finite_params(InitialCondition::Gaussian, BoundaryCondition::Neumann);

        assert_eq!(s.evaluate_heat_kernel(5.0, 0.0, &inf).unwrap(), None);
        assert_eq!(s.evaluate_heat_kernel(5.0, 1.0, &fin).unwrap(), None);

        let peak = s.evaluate_heat_kernel(5.0, 1.0, &inf).unwrap().unwrap();
        assert_eq!(peak, heat_kernel(0.0, 1.0, inf.diffusivity));
        let off = s.evaluate_heat_kernel(6.0, 1.0, &inf).unwrap().unwrap();
        assert!(off < peak);
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let s = SolutionSampler::default();
        assert_eq!(
            s.evaluate_initial_condition(f64::INFINITY, &reference_params()),
            Err(SolveError::InvalidParameter(
                ParamError::NonFiniteCoordinate {
                    value: f64::INFINITY
                }
            ))
        );
    }

    #[test]
    fn frame_carries_overlays_and_metrics() {
        let s = SolutionSampler::default();
        let p = infinite_params(InitialCondition::TwoPeaks);
        let frame = s.sample_frame(2.0, 50, &p).unwrap();
        assert_eq!(frame.t, 2.0);
        assert_eq!(frame.solution.len(), 50);
        assert_eq!(frame.initial.len(), 50);
        assert_eq!(frame.kernel.as_ref().map(Vec::len), Some(50));
        assert_eq!(frame.metrics.points, 50);
        assert_eq!(frame.metrics.solver, "InfiniteBar");
        assert_eq!(frame.metrics.quadrature_nodes, 50 * 200);
        assert!(frame.metrics.total_us >= frame.metrics.solve_us);

        let fin = finite_params(InitialCondition::TwoPeaks, BoundaryCondition::Dirichlet);
        let frame = s.sample_frame(2.0, 20, &fin).unwrap();
        assert!(frame.kernel.is_none());
        assert_eq!(frame.metrics.quadrature_nodes, 20 * 50 * 100);
    }

    #[test]
    fn frame_solution_matches_plain_sample() {
        let s = SolutionSampler::default();
        let p = finite_params(InitialCondition::Sigmoid, BoundaryCondition::Mixed);
        let frame = s.sample_frame(0.75, 40, &p).unwrap();
        assert_eq!(frame.solution, s.sample(0.75, 40, &p).unwrap());
    }
}
