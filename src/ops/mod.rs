//! High-level operations.
//!
//! This module contains the implementation of a `lumina-build` invocation.

pub mod lumina_build;

pub use lumina_build::{build, run, BuildOptions, BuildOutcome, BuildReport, RunOptions};
