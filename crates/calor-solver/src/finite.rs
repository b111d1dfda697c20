//! Finite-bar solver: truncated eigenfunction expansion on `[0, L]`.
//!
//! | Boundary | Eigenvalue `λₙ` | Eigenfunction | Constant mode |
//! |----------|-----------------|---------------|---------------|
//! | Dirichlet | `nπ/L` | `sin(λₙx)` | none |
//! | Neumann | `nπ/L` | `cos(λₙx)` | `A₀ = (1/L)∫f` |
//! | Mixed | `(n - ½)π/L` | `sin(λₙx)` | none |
//!
//! Mode `n` decays as `exp(-αλₙ²t)`. The Neumann constant mode never
//! decays: insulated ends conserve total heat.

use std::f64::consts::PI;

use calor_core::{
    BoundaryCondition, FourierCoefficient, ParamError, Resolution, SimulationParameters,
};
use calor_space::LeftRiemann;
use smallvec::SmallVec;

use crate::initial;
use crate::solver::{check_time, interval_for, BarSolver};

/// Eigenvalue `λₙ` of mode `n >= 1` for the given boundary condition.
pub fn eigenvalue(bc: BoundaryCondition, n: u32, length: f64) -> f64 {
    match bc {
        BoundaryCondition::Dirichlet | BoundaryCondition::Neumann => n as f64 * PI / length,
        BoundaryCondition::Mixed => (n as f64 - 0.5) * PI / length,
    }
}

/// Eigenfunction with eigenvalue `lambda`, evaluated at `x`.
pub fn eigenfunction(bc: BoundaryCondition, lambda: f64, x: f64) -> f64 {
    match bc {
        BoundaryCondition::Dirichlet | BoundaryCondition::Mixed => (lambda * x).sin(),
        BoundaryCondition::Neumann => (lambda * x).cos(),
    }
}

/// A truncated expansion `u(x, t) = A₀ + Σ cₙ φₙ(x) e^{-αλₙ²t}`.
///
/// Built fresh by [`FiniteBarSolver::series`]; nothing is cached between
/// calls.
#[derive(Clone, Debug, PartialEq)]
pub struct FourierSeries {
    boundary: BoundaryCondition,
    length: f64,
    constant: Option<f64>,
    coefficients: SmallVec<[FourierCoefficient; 64]>,
}

impl FourierSeries {
    /// Boundary family the series was built for.
    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Non-decaying constant mode `A₀` (Neumann only).
    pub fn constant_mode(&self) -> Option<f64> {
        self.constant
    }

    /// Coefficients of modes `n = 1..=modes`, in order.
    pub fn coefficients(&self) -> &[FourierCoefficient] {
        &self.coefficients
    }

    /// Evaluate the expansion at `(x, t)` with diffusivity `alpha`.
    pub fn evaluate(&self, x: f64, t: f64, alpha: f64) -> f64 {
        let mut u = self.constant.unwrap_or(0.0);
        for c in &self.coefficients {
            let lambda = eigenvalue(self.boundary, c.n, self.length);
            let decay = (-alpha * lambda * lambda * t).exp();
            u += c.value * eigenfunction(self.boundary, lambda, x) * decay;
        }
        u
    }
}

/// Eigenfunction-expansion solver for a bar on `[0, L]`.
///
/// Each coefficient is a left Riemann sum over `[0, L]` with
/// `coefficient_points` subintervals; all three boundary families use
/// the same resolution.
#[derive(Clone, Debug)]
pub struct FiniteBarSolver {
    coefficient_points: usize,
    modes: usize,
}

impl FiniteBarSolver {
    /// Create a solver using `resolution.coefficient_points` and
    /// `resolution.modes`.
    ///
    /// Returns `Err(ParamError::InvalidResolution)` if either is zero.
    pub fn new(resolution: &Resolution) -> Result<Self, ParamError> {
        resolution.validate()?;
        Ok(Self {
            coefficient_points: resolution.coefficient_points,
            modes: resolution.modes,
        })
    }

    /// Subintervals in each coefficient integral.
    pub fn coefficient_points(&self) -> usize {
        self.coefficient_points
    }

    /// Number of eigenmodes summed.
    pub fn modes(&self) -> usize {
        self.modes
    }

    /// Project the initial condition onto the eigenbasis.
    pub fn series(&self, params: &SimulationParameters) -> Result<FourierSeries, ParamError> {
        params.validate()?;
        let length = params.length;
        let bc = params.boundary_condition;
        let rule = LeftRiemann::new(interval_for(0.0, length, length)?, self.coefficient_points)
            .map_err(|_| ParamError::InvalidResolution {
                name: "coefficient_points",
                value: self.coefficient_points,
            })?;

        // f at the quadrature nodes, shared by every mode of this call.
        let nodes: Vec<(f64, f64)> = rule
            .nodes()
            .map(|xi| (xi, initial::evaluate(xi, params)))
            .collect();
        let h = rule.step();

        let constant = match bc {
            BoundaryCondition::Neumann => {
                let integral: f64 = nodes.iter().map(|&(_, f)| f).sum::<f64>() * h;
                Some(integral / length)
            }
            BoundaryCondition::Dirichlet | BoundaryCondition::Mixed => None,
        };

        let coefficients = (1..=self.modes as u32)
            .map(|n| {
                let lambda = eigenvalue(bc, n, length);
                let integral: f64 = nodes
                    .iter()
                    .map(|&(xi, f)| f * eigenfunction(bc, lambda, xi))
                    .sum::<f64>()
                    * h;
                FourierCoefficient {
                    n,
                    value: 2.0 / length * integral,
                }
            })
            .collect();

        Ok(FourierSeries {
            boundary: bc,
            length,
            constant,
            coefficients,
        })
    }
}

impl Default for FiniteBarSolver {
    fn default() -> Self {
        let r = Resolution::default();
        Self {
            coefficient_points: r.coefficient_points,
            modes: r.modes,
        }
    }
}

impl BarSolver for FiniteBarSolver {
    fn name(&self) -> &str {
        "FiniteBar"
    }

    fn solve(&self, x: f64, t: f64, params: &SimulationParameters) -> Result<f64, ParamError> {
        check_time(t)?;
        params.validate()?;
        if t == 0.0 {
            return Ok(initial::evaluate(x, params));
        }
        Ok(self.series(params)?.evaluate(x, t, params.diffusivity))
    }

    fn quadrature_cost(&self, t: f64, params: &SimulationParameters) -> usize {
        if t == 0.0 {
            return 0;
        }
        let projections = match params.boundary_condition {
            BoundaryCondition::Neumann => self.modes + 1,
            BoundaryCondition::Dirichlet | BoundaryCondition::Mixed => self.modes,
        };
        projections * self.coefficient_points
    }
}
