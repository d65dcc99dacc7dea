//! Project directory layout.
//!
//! Every path the pipeline touches is derived from a [`ProjectLayout`], so the
//! process working directory is never consulted after startup.

use std::path::{Path, PathBuf};

/// Source, include and dependency directories of an engine checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProjectLayout { root: root.into() }
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Recursively scanned for engine sources.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join("include")
    }

    /// Root of the prebuilt runtime dependencies.
    pub fn deps_dir(&self) -> PathBuf {
        self.root.join("deps")
    }

    pub fn deps_include_dir(&self) -> PathBuf {
        self.deps_dir().join("include")
    }

    /// Link-time library directory for one dependency (`deps/lib/<name>`).
    pub fn deps_lib_dir(&self, dep: &str) -> PathBuf {
        self.deps_dir().join("lib").join(dep)
    }

    /// Runtime binary directory for one dependency (`deps/bin/<name>`).
    pub fn deps_bin_dir(&self, dep: &str) -> PathBuf {
        self.deps_dir().join("bin").join(dep)
    }

    /// Entry points and shared example assets.
    pub fn examples_dir(&self) -> PathBuf {
        self.root.join("examples")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.examples_dir().join("assets")
    }

    /// Output directory, recreated on every run.
    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Optional project configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("lumina.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new("/work/lumina");
        assert_eq!(layout.src_dir(), PathBuf::from("/work/lumina/src"));
        assert_eq!(
            layout.deps_lib_dir("SDL2_ttf"),
            PathBuf::from("/work/lumina/deps/lib/SDL2_ttf")
        );
        assert_eq!(
            layout.deps_bin_dir("SDL2"),
            PathBuf::from("/work/lumina/deps/bin/SDL2")
        );
        assert_eq!(
            layout.assets_dir(),
            PathBuf::from("/work/lumina/examples/assets")
        );
        assert_eq!(layout.build_dir(), PathBuf::from("/work/lumina/build"));
    }
}
