//! Toolchain invocation.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::builder::profile::BuildProfile;
use crate::builder::toolchain::{CommandRunner, CommandSpec};
use crate::util::process::resolve_program;
use crate::util::shell::format_duration;
use crate::util::{Shell, Status};

/// Outcome of one compiler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildResult {
    /// Compiler exit code; `None` if it was killed by a signal
    pub exit_code: Option<i32>,
    /// Wall-clock time spent in the compiler
    pub wall_time: Duration,
    /// The produced artifact, present only for a successful run that
    /// actually left the expected file on disk
    pub artifact_path: Option<PathBuf>,
}

impl BuildResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn wall_time_seconds(&self) -> f64 {
        self.wall_time.as_secs_f64()
    }
}

/// Serialize a profile into a single compiler command.
///
/// Order: compiler flags, `-o <output>`, sources, `-I`, `-L`, `-l`, extra
/// toolchain flags. Later `-L`/`-l` flags affect symbol resolution, so each
/// group keeps its profile order.
pub fn build_command(
    profile: &BuildProfile,
    program: impl Into<PathBuf>,
    output_dir: &Path,
) -> CommandSpec {
    let mut cmd = CommandSpec::new(program)
        .args(profile.compiler_flags().iter().cloned())
        .arg("-o")
        .arg(profile.artifact_path(output_dir).display().to_string());

    for source in profile.source_files() {
        cmd = cmd.arg(source.display().to_string());
    }

    for dir in profile.include_dirs() {
        cmd = cmd.arg(format!("-I{}", dir.display()));
    }

    for dir in profile.library_dirs() {
        cmd = cmd.arg(format!("-L{}", dir.display()));
    }

    cmd.args(profile.link_flags().iter().cloned())
        .args(profile.extra_toolchain_flags().iter().cloned())
        .cwd(output_dir)
}

/// Run the compiler for `profile`, writing into `output_dir`.
///
/// The command line is printed before execution and the elapsed time after.
/// A nonzero exit is reported in the result, not raised; only a failure to
/// launch the compiler at all is an error.
pub fn invoke(
    profile: &BuildProfile,
    output_dir: &Path,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> Result<BuildResult> {
    let program = resolve_program(profile.compiler_id());
    let cmd = build_command(profile, program, output_dir);

    shell.status(Status::Compiling, cmd.command_line());

    let start = Instant::now();
    let exit_code = runner.run(&cmd)?;
    let wall_time = start.elapsed();

    shell.status(Status::Finished, finished_message(wall_time));

    let expected = profile.artifact_path(output_dir);
    let artifact_path = (exit_code == Some(0) && expected.is_file()).then_some(expected);

    if exit_code == Some(0) && artifact_path.is_none() {
        tracing::debug!(
            "`{}` exited successfully but produced no {}",
            profile.compiler_id(),
            profile.output_name()
        );
    }

    Ok(BuildResult {
        exit_code,
        wall_time,
        artifact_path,
    })
}

/// Text after the `Finished` status word, e.g. `compilation in 1.23s`.
fn finished_message(wall_time: Duration) -> String {
    format!("compilation in {}", format_duration(wall_time))
}
