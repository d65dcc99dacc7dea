//! Command specs and the seam through which they are executed.
//!
//! Both the compiler invocation and the launch of the built game go through a
//! [`CommandRunner`], so the whole pipeline can be driven by a scripted runner
//! in tests.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::process::ProcessBuilder;

/// A command to execute, with program, arguments, and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// The program to run (e.g., "gcc", "emcc")
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<String>,
    /// Working directory (inherits the caller's when unset)
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// The space-joined command line.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Executes commands to completion.
pub trait CommandRunner {
    /// Run `cmd` and wait for it.
    ///
    /// Returns the exit code, or `None` if the process was terminated by a
    /// signal. Failing to launch the process at all is an error.
    fn run(&self, cmd: &CommandSpec) -> Result<Option<i32>>;
}

/// Runs commands as real child processes sharing the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn process_builder_from_spec(spec: &CommandSpec) -> ProcessBuilder {
        let mut pb = ProcessBuilder::new(&spec.program).args(&spec.args);
        if let Some(ref cwd) = spec.cwd {
            pb = pb.cwd(cwd);
        }
        pb
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<Option<i32>> {
        let pb = Self::process_builder_from_spec(cmd);
        tracing::debug!("spawning `{}`", pb.display_command());
        let status = pb.status()?;
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_preserves_order() {
        let cmd = CommandSpec::new("gcc")
            .args(["-std=gnu11", "-g3"])
            .arg("-o")
            .arg("lumina")
            .args(["-LSDL2", "-lSDL2main", "-lSDL2"]);

        assert_eq!(
            cmd.command_line(),
            "gcc -std=gnu11 -g3 -o lumina -LSDL2 -lSDL2main -lSDL2"
        );
    }

    #[test]
    fn test_process_builder_from_spec() {
        let spec = CommandSpec::new("emcc").arg("-O3").cwd("/tmp/build");
        let pb = SystemRunner::process_builder_from_spec(&spec);
        assert_eq!(pb.get_program(), Path::new("emcc"));
        assert_eq!(pb.get_args(), ["-O3".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_exit_code() {
        let cmd = CommandSpec::new("sh").args(["-c", "exit 7"]);
        assert_eq!(SystemRunner.run(&cmd).unwrap(), Some(7));
    }

    #[test]
    fn test_system_runner_missing_program_is_error() {
        let cmd = CommandSpec::new("lumina-build-no-such-program");
        let err = SystemRunner.run(&cmd).unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }
}
