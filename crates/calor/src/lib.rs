//! Calor: 1-D heat equation profiles for real-time visualization.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Calor sub-crates. For most users, adding `calor` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use calor::prelude::*;
//!
//! let sampler = SolutionSampler::default();
//! let params = SimulationParameters::builder()
//!     .diffusivity(0.1)
//!     .length(10.0)
//!     .bar_type(BarType::Finite)
//!     .initial_condition(InitialCondition::TwoPeaks)
//!     .boundary_condition(BoundaryCondition::Neumann)
//!     .build()
//!     .unwrap();
//!
//! // One call per redraw tick.
//! let frame = sampler.sample_frame(2.5, 200, &params).unwrap();
//! assert_eq!(frame.solution.len(), 200);
//! assert!(frame.kernel.is_none()); // finite bar: no kernel overlay
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `calor-core` | Parameters, enums, samples, resolution, errors |
//! | [`space`] | `calor-space` | Intervals, uniform grids, Riemann quadrature |
//! | [`solver`] | `calor-solver` | Initial profiles, heat kernel, bar solvers |
//! | [`engine`] | `calor-engine` | `SolutionSampler`, config, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`calor-core`).
///
/// [`types::SimulationParameters`] and its enums, the quadrature
/// [`types::Resolution`], sampled values, and the error types.
pub use calor_core as types;

/// Spatial support (`calor-space`).
pub use calor_space as space;

/// Numerical solvers (`calor-solver`).
///
/// [`solver::InfiniteBarSolver`], [`solver::FiniteBarSolver`], the
/// [`solver::initial`] profile library and [`solver::heat_kernel`].
pub use calor_solver as solver;

/// Sampling front end (`calor-engine`).
pub use calor_engine as engine;

/// Common imports for typical Calor usage.
///
/// ```rust
/// use calor::prelude::*;
/// ```
pub mod prelude {
    // Parameters and outputs
    pub use calor_core::{
        BarType, BoundaryCondition, FourierCoefficient, InitialCondition, Resolution,
        SimulationParameters, SpatialSample,
    };

    // Errors
    pub use calor_core::{ParamError, SolveError};

    // Solvers
    pub use calor_solver::{BarSolver, FiniteBarSolver, FourierSeries, InfiniteBarSolver};

    // Sampler
    pub use calor_engine::{SampleFrame, SampleMetrics, SamplerConfig, SolutionSampler};
}
