//! Implementation of a `lumina-build` run.
//!
//! One invocation walks a fixed sequence:
//!
//! ```text
//! RESET -> RESOLVE_SOURCES -> SELECT_PROFILE -> INVOKE_TOOLCHAIN
//!     -> FAILED                  (nonzero exit, reported)
//!     -> STAGE -> RUN            (native binary, or web dev server)
//! ```

use std::path::PathBuf;

use anyhow::Result;

use crate::builder::{
    invoke, reset_output_dir, resolve_sources, select_profile, BuildProfile, BuildResult,
    CommandRunner, StageOutcome, StagingPlan,
};
use crate::core::{Platform, Preset, ProjectLayout, TargetKind};
use crate::runner::{run_native, serve_web, CancelToken};
use crate::util::{BuildConfig, Shell, Status};

/// Options for a build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Requested target name, as given on the command line
    pub target: String,

    /// Debug or release flags
    pub preset: Preset,

    /// Platform whose naming conventions apply
    pub platform: Platform,

    /// Stop after selecting the profile
    pub emit_plan: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            target: String::new(),
            preset: Preset::Debug,
            platform: Platform::host(),
            emit_plan: false,
        }
    }
}

/// Options for running what was built.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Run the binary / start the server at all
    pub run: bool,

    /// Open a browser for web builds
    pub open_browser: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            run: true,
            open_browser: true,
        }
    }
}

/// Result of the build half of a run.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub profile: BuildProfile,
    pub output_dir: PathBuf,
    pub result: BuildResult,
    pub stage: StageOutcome,
}

impl BuildReport {
    /// Whether the artifact was built and staged.
    pub fn is_runnable(&self) -> bool {
        matches!(self.stage, StageOutcome::Staged { .. })
    }
}

/// What a build produced.
#[derive(Debug, Clone)]
pub enum BuildOutcome {
    /// `--plan`: the profile was selected and nothing was compiled.
    Planned(BuildProfile),
    Built(BuildReport),
}

/// Build the requested target into `layout.build_dir()`.
///
/// Environment errors (unknown target, missing entry point, missing runtime
/// library) abort the run. A compiler failure does not: it is returned in the
/// report with staging skipped.
pub fn build(
    layout: &ProjectLayout,
    config: &BuildConfig,
    opts: &BuildOptions,
    runner: &dyn CommandRunner,
    shell: &Shell,
) -> Result<BuildOutcome> {
    let output_dir = layout.build_dir();
    shell.verbose(Status::Resetting, output_dir.display());
    reset_output_dir(&output_dir)?;

    let kind: TargetKind = opts.target.parse()?;

    let entry_point = layout.root().join(config.entry_point(kind));
    let sources = resolve_sources(&layout.src_dir(), &entry_point)?;
    tracing::debug!(
        "{} engine source file(s) for {}",
        sources.discovered().len(),
        kind
    );

    let profile = select_profile(kind, opts.preset, layout, config, opts.platform, &sources);

    if opts.emit_plan {
        return Ok(BuildOutcome::Planned(profile));
    }

    let plan = StagingPlan::for_profile(&profile, layout);
    if let Some(page) = plan.write_host_page(&output_dir)? {
        shell.status(Status::Created, page.display());
    }

    let result = invoke(&profile, &output_dir, runner, shell)?;

    let stage = if result.success() {
        plan.apply(&result, &output_dir)?
    } else {
        StageOutcome::Skipped
    };

    match &stage {
        StageOutcome::Staged { libraries, assets } => shell.status(
            Status::Staged,
            format!(
                "{} ({} runtime libraries, {} assets)",
                profile.output_name(),
                libraries.len(),
                assets.len()
            ),
        ),
        StageOutcome::Skipped => match result.exit_code {
            Some(0) => shell.warn(format!(
                "{} exited successfully but did not produce {}",
                profile.compiler_id(),
                profile.output_name()
            )),
            Some(code) => shell.error(format!(
                "{} failed with exit code {}",
                profile.compiler_id(),
                code
            )),
            None => shell.error(format!("{} was terminated by a signal", profile.compiler_id())),
        },
    }

    Ok(BuildOutcome::Built(BuildReport {
        profile,
        output_dir,
        result,
        stage,
    }))
}

/// Run the staged artifact.
///
/// Native builds are executed and their exit code reported; web builds are
/// served until `token` is cancelled. Returns the native exit code, if any.
pub fn run(
    report: &BuildReport,
    config: &BuildConfig,
    opts: &RunOptions,
    runner: &dyn CommandRunner,
    token: &CancelToken,
    shell: &Shell,
) -> Result<Option<i32>> {
    if !opts.run || !report.is_runnable() {
        return Ok(None);
    }

    if report.profile.target_kind().is_native() {
        let artifact = report
            .result
            .artifact_path
            .clone()
            .unwrap_or_else(|| report.profile.artifact_path(&report.output_dir));
        run_native(&artifact, &report.output_dir, runner, shell)
    } else {
        serve_web(
            &report.output_dir,
            config.web.port,
            opts.open_browser,
            token,
            shell,
        )?;
        Ok(None)
    }
}
