//! Sampling front end for the Calor heat equation solvers.
//!
//! [`SolutionSampler`] is what a visualization layer talks to: once per
//! redraw tick it hands over a parameter snapshot, a time and a point
//! count, and receives an ordered curve over `[0, L]`. Dispatch to the
//! infinite- or finite-bar solver follows the snapshot's bar type.
//!
//! Sampling is synchronous and stateless. The sampler owns only its
//! immutable [`SamplerConfig`], so one instance can be shared across
//! threads by reference.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod sampler;

pub use config::{ConfigError, SamplerConfig};
pub use metrics::SampleMetrics;
pub use sampler::{SampleFrame, SolutionSampler};
