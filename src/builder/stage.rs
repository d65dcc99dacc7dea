//! Artifact staging.
//!
//! After a successful native build the runtime libraries and the example
//! assets are copied next to the binary so it runs from the output
//! directory. Web builds only need their host page.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::html::HostPage;
use crate::builder::invoke::BuildResult;
use crate::builder::profile::{BuildProfile, HOST_PAGE_NAME};
use crate::core::{BuildError, ProjectLayout};
use crate::util::fs::{copy_dir_flat, copy_file};

/// Name of the asset directory inside the output directory.
pub const ASSETS_DIR_NAME: &str = "assets";

/// A runtime library to ship with the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeLibrary {
    /// Dependency name, e.g. `SDL2_ttf`
    pub name: String,
    /// Prebuilt file under `deps/bin/<name>/`
    pub source: PathBuf,
    /// File name in the output directory
    pub dest_name: String,
}

/// Everything that has to land next to the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingPlan {
    pub runtime_libraries: Vec<RuntimeLibrary>,
    /// Source directory and its destination relative to the output directory
    pub asset_tree: Option<(PathBuf, PathBuf)>,
    pub generated_html: Option<HostPage>,
}

/// What [`StagingPlan::apply`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The build failed or left no artifact; nothing was copied.
    Skipped,
    Staged {
        libraries: Vec<PathBuf>,
        assets: Vec<PathBuf>,
    },
}

impl StagingPlan {
    /// Derive the staging plan for a profile.
    pub fn for_profile(profile: &BuildProfile, layout: &ProjectLayout) -> Self {
        if !profile.target_kind().is_native() {
            return StagingPlan {
                runtime_libraries: Vec::new(),
                asset_tree: None,
                generated_html: Some(HostPage::new(HOST_PAGE_NAME, profile.output_name())),
            };
        }

        let platform = profile.platform();
        let runtime_libraries = profile
            .runtime_libraries()
            .iter()
            .map(|name| {
                let file = platform.shared_lib_filename(name);
                RuntimeLibrary {
                    name: name.clone(),
                    source: layout.deps_bin_dir(name).join(&file),
                    dest_name: file,
                }
            })
            .collect();

        StagingPlan {
            runtime_libraries,
            asset_tree: Some((layout.assets_dir(), PathBuf::from(ASSETS_DIR_NAME))),
            generated_html: None,
        }
    }

    /// Write the host page, if this plan has one.
    ///
    /// Called before compilation; a failed build leaves the page in place.
    pub fn write_host_page(&self, output_dir: &Path) -> Result<Option<PathBuf>> {
        self.generated_html
            .as_ref()
            .map(|page| page.write_to(output_dir))
            .transpose()
    }

    /// Copy runtime libraries and assets into `output_dir`.
    ///
    /// Gated purely on this invocation's result: a zero exit code and an
    /// artifact on disk. A stale file from an earlier run does not count.
    pub fn apply(&self, result: &BuildResult, output_dir: &Path) -> Result<StageOutcome> {
        if !result.success() || result.artifact_path.is_none() {
            tracing::debug!("skipping staging (exit code {:?})", result.exit_code);
            return Ok(StageOutcome::Skipped);
        }

        let mut libraries = Vec::with_capacity(self.runtime_libraries.len());
        for lib in &self.runtime_libraries {
            if !lib.source.is_file() {
                return Err(BuildError::MissingRuntimeLibrary {
                    name: lib.name.clone(),
                    path: lib.source.clone(),
                }
                .into());
            }
            let dest = output_dir.join(&lib.dest_name);
            copy_file(&lib.source, &dest)?;
            libraries.push(dest);
        }

        let assets = match &self.asset_tree {
            Some((src, dest)) if src.is_dir() => copy_dir_flat(src, &output_dir.join(dest))?,
            Some((src, _)) => {
                tracing::warn!("asset directory {} not found, skipping", src.display());
                Vec::new()
            }
            None => Vec::new(),
        };

        Ok(StageOutcome::Staged { libraries, assets })
    }
}
