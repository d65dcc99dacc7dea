//! Launching native builds.

use std::path::Path;

use anyhow::Result;

use crate::builder::toolchain::{CommandRunner, CommandSpec};
use crate::util::{Shell, Status};

/// Run the freshly staged binary from `output_dir` and report its exit code.
///
/// The working directory is the output directory so the game's relative
/// `assets/...` paths resolve against the staged copy. The binary's exit code
/// is reported, never interpreted.
pub fn run_native(
    artifact: &Path,
    output_dir: &Path,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> Result<Option<i32>> {
    let name = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| artifact.display().to_string());

    let cmd = CommandSpec::new(artifact).cwd(output_dir);
    shell.status(Status::Running, format!("`{}`", cmd.command_line()));

    let code = runner.run(&cmd)?;
    shell.note(exit_message(&name, code));

    Ok(code)
}

fn exit_message(name: &str, code: Option<i32>) -> String {
    match code {
        Some(code) => format!("{} exited with code {}", name, code),
        None => format!("{} was terminated by a signal", name),
    }
}
