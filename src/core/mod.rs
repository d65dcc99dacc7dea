//! Core data structures for lumina-build.
//!
//! - Target kinds, presets and host platform identity
//! - The project directory layout
//! - Domain errors

pub mod error;
pub mod layout;
pub mod target;

pub use error::BuildError;
pub use layout::ProjectLayout;
pub use target::{Platform, Preset, TargetKind};
