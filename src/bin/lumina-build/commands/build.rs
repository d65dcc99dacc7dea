//! The build-and-run command

use std::env;

use anyhow::{Context, Result};

use crate::cli::Cli;
use lumina_build::core::{Preset, ProjectLayout};
use lumina_build::ops::lumina_build::{build, run, BuildOptions, BuildOutcome, RunOptions};
use lumina_build::runner::CancelToken;
use lumina_build::util::{BuildConfig, Shell};
use lumina_build::SystemRunner;

pub fn execute(cli: Cli) -> Result<()> {
    let shell = Shell::from_flags(cli.verbose, cli.no_color);

    // Commands run with the output dir as cwd, so every path must be absolute.
    let cwd = env::current_dir().context("failed to determine current directory")?;
    let root = match cli.project_dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    let layout = ProjectLayout::new(root);

    let config = BuildConfig::load_or_default(&layout.config_path())?;

    let opts = BuildOptions {
        target: cli.mode.unwrap_or_default(),
        preset: Preset::from_release_flag(cli.release),
        emit_plan: cli.plan,
        ..Default::default()
    };

    let runner = SystemRunner;
    let report = match build(&layout, &config, &opts, &runner, &shell)? {
        BuildOutcome::Planned(profile) => {
            let json = serde_json::to_string_pretty(&profile)
                .context("failed to serialize build profile")?;
            println!("{}", json);
            return Ok(());
        }
        BuildOutcome::Built(report) => report,
    };

    // Toolchain failures were already reported; the tool itself succeeded.
    if !report.is_runnable() {
        return Ok(());
    }

    let token = CancelToken::new();
    {
        let token = token.clone();
        ctrlc::set_handler(move || token.cancel())
            .context("failed to install Ctrl-C handler")?;
    }

    let run_opts = RunOptions {
        run: !cli.no_run,
        open_browser: !cli.no_open,
    };
    run(&report, &config, &run_opts, &runner, &token, &shell)?;

    Ok(())
}
