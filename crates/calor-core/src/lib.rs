//! Core types for the Calor heat equation solvers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the simulation parameter snapshot, the closed enums that select a
//! solver family, the quadrature [`Resolution`], sampled output types,
//! and the error types shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod resolution;
pub mod sample;

pub use error::{ParamError, SolveError};
pub use params::{
    BarType, BoundaryCondition, InitialCondition, SimulationParameters,
    SimulationParametersBuilder,
};
pub use resolution::{
    Resolution, DEFAULT_COEFFICIENT_POINTS, DEFAULT_CONVOLUTION_POINTS, DEFAULT_MODES,
    DEFAULT_SAMPLE_POINTS,
};
pub use sample::{FourierCoefficient, SpatialSample};
