//! Test utilities for Calor development.
//!
//! Provides reference parameter snapshots, iteration over every
//! configuration combination, and tolerance assertions for solver output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    all_combinations, assert_close, finite_params, infinite_params, reference_params,
    REFERENCE_DIFFUSIVITY, REFERENCE_LENGTH,
};
