//! Output directory reset.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::fs::remove_dir_all_if_exists;

/// Remove `output_dir` if present and recreate it empty.
///
/// Every build starts from a clean slate. The returned path is the directory
/// every later stage resolves its outputs against.
pub fn reset_output_dir(output_dir: &Path) -> Result<PathBuf> {
    remove_dir_all_if_exists(output_dir)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create directory: {}", output_dir.display()))?;

    tracing::debug!("reset output directory {}", output_dir.display());
    Ok(output_dir.to_path_buf())
}
