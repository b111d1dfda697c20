//! Numerical solvers for the 1-D heat equation `u_t = α u_xx`.
//!
//! # Components
//!
//! - [`initial`]: the seven canonical initial profiles, with the
//!   Dirichlet post-processing applied on finite bars
//! - [`kernel`]: the heat kernel (Green's function) on the real line
//! - [`InfiniteBarSolver`]: Riemann-sum convolution of the initial profile
//!   with the kernel
//! - [`FiniteBarSolver`]: truncated eigenfunction expansion for
//!   Dirichlet, Neumann and mixed ends
//!
//! Both solvers implement [`BarSolver`]. At `t = 0` they return the
//! initial profile directly and never touch the kernel or the expansion.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod finite;
pub mod infinite;
pub mod initial;
pub mod kernel;
pub mod solver;

pub use finite::{FiniteBarSolver, FourierSeries};
pub use infinite::InfiniteBarSolver;
pub use kernel::heat_kernel;
pub use solver::BarSolver;
