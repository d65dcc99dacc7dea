//! lumina-build - build orchestrator for the Lumina game engine
//!
//! This crate compiles the engine together with one of its example entry
//! points for a desktop or web target, stages the runtime libraries and
//! assets next to the artifact, and then runs the binary or serves the web
//! build locally.

pub mod builder;
pub mod core;
pub mod ops;
pub mod runner;
pub mod util;

/// Test utilities and mocks for lumina-build unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a scripted command runner and synthetic
/// engine checkouts.
#[cfg(test)]
pub mod test_support;

pub use builder::{BuildProfile, BuildResult, CommandRunner, SystemRunner};
pub use core::{BuildError, Platform, Preset, ProjectLayout, TargetKind};
pub use util::{BuildConfig, Shell};
