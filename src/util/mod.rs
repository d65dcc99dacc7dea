//! Shared utilities

pub mod config;
pub mod fs;
pub mod process;
pub mod shell;

pub use config::BuildConfig;
pub use shell::{Shell, Status};
