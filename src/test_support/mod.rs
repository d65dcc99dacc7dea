//! Test utilities and mocks for lumina-build unit tests.
//!
//! [`MockRunner`] stands in for both the compiler and the built game: any
//! command carrying `-o <path>` is treated as a compiler invocation, anything
//! else as a launch of the artifact.
//!
//! # Example
//!
//! ```rust,ignore
//! let (_tmp, layout) = ProjectFixture::engine().write_temp();
//! let runner = MockRunner::new().compiler_exit(0).binary_exit(3);
//! ```

pub mod fixtures;

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;

use crate::builder::toolchain::{CommandRunner, CommandSpec};

pub use fixtures::*;

/// When the mock compiler writes its `-o` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactMode {
    /// Only when it exits 0, like a real compiler
    OnSuccess,
    /// Never, even when it exits 0
    Never,
    /// Always, even when it fails
    Always,
}

/// Scripted [`CommandRunner`] that records every call.
#[derive(Debug)]
pub struct MockRunner {
    compiler_exit: Option<i32>,
    binary_exit: Option<i32>,
    artifact: ArtifactMode,
    calls: Mutex<Vec<CommandSpec>>,
}

impl MockRunner {
    /// Compiler and binary both succeed; the compiler writes its output.
    pub fn new() -> Self {
        MockRunner {
            compiler_exit: Some(0),
            binary_exit: Some(0),
            artifact: ArtifactMode::OnSuccess,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Exit code of compiler invocations.
    pub fn compiler_exit(mut self, code: i32) -> Self {
        self.compiler_exit = Some(code);
        self
    }

    /// Exit code of artifact launches.
    pub fn binary_exit(mut self, code: i32) -> Self {
        self.binary_exit = Some(code);
        self
    }

    /// Exit 0 without producing output.
    pub fn without_artifact(mut self) -> Self {
        self.artifact = ArtifactMode::Never;
        self
    }

    /// Leave an output file behind even when failing.
    pub fn always_write_artifact(mut self) -> Self {
        self.artifact = ArtifactMode::Always;
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Compiler invocations run so far.
    pub fn compiler_calls(&self) -> Vec<CommandSpec> {
        self.calls()
            .into_iter()
            .filter(|c| c.args.iter().any(|a| a == "-o"))
            .collect()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        MockRunner::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<Option<i32>> {
        self.calls.lock().unwrap().push(cmd.clone());

        let Some(pos) = cmd.args.iter().position(|a| a == "-o") else {
            return Ok(self.binary_exit);
        };

        let write = match self.artifact {
            ArtifactMode::OnSuccess => self.compiler_exit == Some(0),
            ArtifactMode::Never => false,
            ArtifactMode::Always => true,
        };
        if write {
            if let Some(output) = cmd.args.get(pos + 1) {
                fs::write(Path::new(output), b"mock artifact")?;
            }
        }

        Ok(self.compiler_exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_distinguishes_compiler_and_binary() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("game");
        let runner = MockRunner::new().compiler_exit(0).binary_exit(5);

        let compile = CommandSpec::new("gcc").arg("-o").arg(out.display().to_string());
        assert_eq!(runner.run(&compile).unwrap(), Some(0));
        assert!(out.is_file());

        let launch = CommandSpec::new(&out);
        assert_eq!(runner.run(&launch).unwrap(), Some(5));

        assert_eq!(runner.calls().len(), 2);
        assert_eq!(runner.compiler_calls(), vec![compile]);
    }

    #[test]
    fn test_mock_runner_failure_writes_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("game");
        let runner = MockRunner::new().compiler_exit(2);

        let compile = CommandSpec::new("gcc").arg("-o").arg(out.display().to_string());
        assert_eq!(runner.run(&compile).unwrap(), Some(2));
        assert!(!out.exists());
    }
}
