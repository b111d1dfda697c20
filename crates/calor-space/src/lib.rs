//! One-dimensional spatial support for Calor solvers.
//!
//! - [`Interval`]: a closed, non-degenerate range `[start, end]`
//! - [`UniformGrid`]: evenly spaced sample coordinates including both ends
//! - [`LeftRiemann`]: fixed-resolution left-endpoint quadrature
//!
//! All three are plain values with no interior state; building one is
//! cheap and the solvers rebuild them on every call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod interval;
pub mod quadrature;

pub use error::SpaceError;
pub use grid::UniformGrid;
pub use interval::Interval;
pub use quadrature::LeftRiemann;
