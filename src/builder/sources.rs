//! Source discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

use crate::core::BuildError;

/// File extension of engine sources.
pub const SOURCE_EXTENSION: &str = "c";

/// The sources handed to the compiler: one entry point plus the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    entry_point: PathBuf,
    discovered: Vec<PathBuf>,
}

impl SourceSet {
    /// The target-specific entry point.
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Engine sources found under the source root, sorted.
    pub fn discovered(&self) -> &[PathBuf] {
        &self.discovered
    }

    /// All sources, entry point first.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.entry_point.as_path())
            .chain(self.discovered.iter().map(PathBuf::as_path))
    }

    pub fn to_vec(&self) -> Vec<PathBuf> {
        self.iter().map(Path::to_path_buf).collect()
    }
}

/// Collect `entry_point` followed by every `.c` file below `src_root`.
///
/// Discovered files are sorted so generated command lines are reproducible.
/// If the entry point itself lives under `src_root` it is listed only once.
pub fn resolve_sources(src_root: &Path, entry_point: &Path) -> Result<SourceSet> {
    if !entry_point.is_file() {
        return Err(BuildError::MissingEntryPoint {
            path: entry_point.to_path_buf(),
        }
        .into());
    }

    let entry_key = entry_point.canonicalize()?;
    let mut discovered = Vec::new();

    if src_root.is_dir() {
        for entry in WalkDir::new(src_root).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION)
            {
                continue;
            }
            if path.canonicalize().ok().as_deref() == Some(entry_key.as_path()) {
                continue;
            }
            discovered.push(path.to_path_buf());
        }
    } else {
        tracing::debug!("source root {} does not exist", src_root.display());
    }

    discovered.sort();
    tracing::debug!("discovered {} source file(s)", discovered.len());

    Ok(SourceSet {
        entry_point: entry_point.to_path_buf(),
        discovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_entry_point_first_then_discovered() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let entry = tmp.path().join("examples").join("basic.c");
        touch(&entry);
        touch(&src.join("core").join("game.c"));
        touch(&src.join("graphics").join("draw.c"));
        touch(&src.join("core").join("game.h"));
        touch(&src.join("notes.txt"));

        let set = resolve_sources(&src, &entry).unwrap();
        let files = set.to_vec();

        assert_eq!(files[0], entry);
        assert_eq!(files.len(), 3);
        assert_eq!(files.iter().filter(|f| **f == entry).count(), 1);
        assert!(files.iter().all(|f| f.extension().unwrap() == "c"));
    }

    #[test]
    fn test_discovered_membership_is_a_set() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let entry = tmp.path().join("main.c");
        touch(&entry);

        let expected: BTreeSet<PathBuf> = [
            src.join("a.c"),
            src.join("z").join("b.c"),
            src.join("m").join("n").join("c.c"),
        ]
        .into_iter()
        .collect();
        for path in &expected {
            touch(path);
        }

        let set = resolve_sources(&src, &entry).unwrap();
        let found: BTreeSet<PathBuf> = set.discovered().iter().cloned().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_entry_point_inside_src_is_not_duplicated() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let entry = src.join("main.c");
        touch(&entry);
        touch(&src.join("util.c"));

        let set = resolve_sources(&src, &entry).unwrap();
        assert_eq!(set.to_vec(), vec![entry, src.join("util.c")]);
    }

    #[test]
    fn test_missing_entry_point() {
        let tmp = TempDir::new().unwrap();
        let err = resolve_sources(&tmp.path().join("src"), &tmp.path().join("nope.c")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::MissingEntryPoint { .. })
        ));
    }

    #[test]
    fn test_missing_src_root_yields_entry_only() {
        let tmp = TempDir::new().unwrap();
        let entry = tmp.path().join("basic.c");
        touch(&entry);

        let set = resolve_sources(&tmp.path().join("src"), &entry).unwrap();
        assert_eq!(set.to_vec(), vec![entry]);
        assert!(set.discovered().is_empty());
    }
}
