//! Benchmark profiles for the Calor heat equation solvers.
//!
//! - [`reference_profile`]: reference α and L, 500-point curves
//! - [`stress_profile`]: doubled quadrature resolution and mode count
//! - [`redraw_times`]: the time sequence a 60 Hz driver would request

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use calor_core::{Resolution, SimulationParameters, DEFAULT_SAMPLE_POINTS};
use calor_engine::SamplerConfig;

/// A sampler configuration plus the snapshot it is benchmarked against.
pub struct BenchProfile {
    /// Sampler configuration under test.
    pub config: SamplerConfig,
    /// Parameter snapshot passed on every call.
    pub params: SimulationParameters,
    /// Points per sampled curve.
    pub points: usize,
}

/// Default resolution (200 / 100 / 50) and 500 points per curve.
pub fn reference_profile(params: SimulationParameters) -> BenchProfile {
    BenchProfile {
        config: SamplerConfig::default(),
        params,
        points: DEFAULT_SAMPLE_POINTS,
    }
}

/// Twice the default quadrature points and modes.
pub fn stress_profile(params: SimulationParameters) -> BenchProfile {
    let base = Resolution::default();
    BenchProfile {
        config: SamplerConfig {
            resolution: Resolution {
                convolution_points: base.convolution_points * 2,
                coefficient_points: base.coefficient_points * 2,
                modes: base.modes * 2,
            },
            ..SamplerConfig::default()
        },
        params,
        points: DEFAULT_SAMPLE_POINTS,
    }
}

/// `frames` evenly spaced times starting at 0 with step `1/60`.
pub fn redraw_times(frames: usize) -> Vec<f64> {
    (0..frames).map(|i| i as f64 / 60.0).collect()
}
