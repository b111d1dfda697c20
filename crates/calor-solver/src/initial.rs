//! Initial temperature profiles `f(x)`.
//!
//! Every profile is total over the real line: the infinite-bar solver
//! evaluates it well outside `[0, L]`. Unless noted the profile is
//! centered at `c = L / 2`.

use std::f64::consts::PI;

use calor_core::{BarType, BoundaryCondition, InitialCondition, SimulationParameters};

/// Wave numbers of the chaotic profile, in units of `π / L`.
const CHAOTIC_FREQUENCIES: [f64; 8] = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0];
const CHAOTIC_AMPLITUDES: [f64; 8] = [0.5, 0.3, 0.4, 0.25, 0.2, 0.15, 0.1, 0.08];
const CHAOTIC_PHASES: [f64; 8] = [0.0, 0.5, 1.2, -0.8, 2.1, -1.5, 0.3, -2.0];
/// Affine map `(v + OFFSET) / SCALE` applied to the chaotic sum.
const CHAOTIC_OFFSET: f64 = 1.5;
const CHAOTIC_SCALE: f64 = 2.0;

/// Raw profile value, without any boundary post-processing.
pub fn profile(kind: InitialCondition, x: f64, length: f64) -> f64 {
    let c = length / 2.0;
    match kind {
        InitialCondition::Gaussian => (-(x - c).powi(2) / 0.5).exp(),
        InitialCondition::Step => {
            if x > c - 1.0 && x < c + 1.0 {
                1.0
            } else {
                0.0
            }
        }
        InitialCondition::StepDiscontinuous => {
            if x >= c {
                1.0
            } else {
                0.0
            }
        }
        InitialCondition::Triangle => {
            if x >= c - 1.0 && x <= c {
                x - (c - 1.0)
            } else if x > c && x <= c + 1.0 {
                (c + 1.0) - x
            } else {
                0.0
            }
        }
        InitialCondition::TwoPeaks => {
            let left = (-(x - 0.3 * length).powi(2) / 0.3).exp();
            let right = (-(x - 0.7 * length).powi(2) / 0.3).exp();
            left + right
        }
        InitialCondition::Sigmoid => 1.0 / (1.0 + (-2.0 * (x - c)).exp()),
        InitialCondition::Chaotic => chaotic(x, length),
    }
}

/// Eight-mode superposition; even terms use `sin`, odd terms `cos`.
fn chaotic(x: f64, length: f64) -> f64 {
    let mut value = 0.0;
    for i in 0..CHAOTIC_FREQUENCIES.len() {
        let arg = CHAOTIC_FREQUENCIES[i] * PI * x / length + CHAOTIC_PHASES[i];
        let wave = if i % 2 == 0 { arg.sin() } else { arg.cos() };
        value += CHAOTIC_AMPLITUDES[i] * wave;
    }
    (value + CHAOTIC_OFFSET) / CHAOTIC_SCALE
}

/// Whether [`evaluate`] multiplies the profile by `sin(πx/L)`.
pub fn pins_endpoints(params: &SimulationParameters) -> bool {
    params.bar_type == BarType::Finite && params.boundary_condition == BoundaryCondition::Dirichlet
}

/// Initial condition `f(x)` as seen by the solvers.
///
/// On a finite bar with Dirichlet ends the profile is multiplied by
/// `sin(πx/L)` so that `f(0) = f(L) = 0` holds exactly.
pub fn evaluate(x: f64, params: &SimulationParameters) -> f64 {
    let raw = profile(params.initial_condition, x, params.length);
    if pins_endpoints(params) {
        raw * (PI * x / params.length).sin()
    } else {
        raw
    }
}
