//! Reusable parameter fixtures.
//!
//! - [`reference_params`]: α = 0.1, L = 10, infinite bar, gaussian.
//! - [`finite_params`] / [`infinite_params`]: reference values with a
//!   chosen profile and boundary.
//! - [`all_combinations`]: every bar × profile × boundary triple.

use calor_core::{BarType, BoundaryCondition, InitialCondition, SimulationParameters};

pub const REFERENCE_DIFFUSIVITY: f64 = 0.1;
pub const REFERENCE_LENGTH: f64 = 10.0;

pub fn reference_params() -> SimulationParameters {
    SimulationParameters {
        diffusivity: REFERENCE_DIFFUSIVITY,
        length: REFERENCE_LENGTH,
        bar_type: BarType::Infinite,
        initial_condition: InitialCondition::Gaussian,
        boundary_condition: BoundaryCondition::Dirichlet,
    }
}

pub fn finite_params(ic: InitialCondition, bc: BoundaryCondition) -> SimulationParameters {
    SimulationParameters {
        bar_type: BarType::Finite,
        initial_condition: ic,
        boundary_condition: bc,
        ..reference_params()
    }
}

pub fn infinite_params(ic: InitialCondition) -> SimulationParameters {
    SimulationParameters {
        bar_type: BarType::Infinite,
        initial_condition: ic,
        ..reference_params()
    }
}

/// Every `(bar, profile, boundary)` combination at the reference α and L.
///
/// Boundary conditions are enumerated for infinite bars too, even though
/// they have no effect there; callers can then check that they don't.
pub fn all_combinations() -> impl Iterator<Item = SimulationParameters> {
    BarType::ALL.into_iter().flat_map(|bar| {
        InitialCondition::ALL.into_iter().flat_map(move |ic| {
            BoundaryCondition::ALL
                .into_iter()
                .map(move |bc| SimulationParameters {
                    bar_type: bar,
                    initial_condition: ic,
                    boundary_condition: bc,
                    ..reference_params()
                })
        })
    })
}

/// Panic unless `|actual - expected| <= tol`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: got {actual}, expected {expected} (tol {tol})"
    );
}
