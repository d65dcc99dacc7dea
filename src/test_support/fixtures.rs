//! Synthetic engine checkouts for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::{Platform, ProjectLayout};

/// Engine sources discovered under `src/`.
pub const ENGINE_SOURCES: &[&str] = &[
    "src/core/game.c",
    "src/core/window.c",
    "src/graphics/draw.c",
    "src/collections/array.c",
];

/// Runtime libraries shipped under `deps/bin/`.
pub const RUNTIME_DEPS: &[&str] = &["SDL2", "SDL2_ttf", "SDL2_image"];

/// Fixture for a complete engine checkout.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Files to write (path relative to project root -> content).
    pub files: BTreeMap<PathBuf, String>,
}

impl ProjectFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        ProjectFixture {
            files: BTreeMap::new(),
        }
    }

    /// The full engine layout: sources, headers, both entry points, assets
    /// (with one nested directory) and runtime libraries for the host.
    pub fn engine() -> Self {
        let mut fixture = ProjectFixture::new()
            .with_file("include/lumina/lumina.h", "#pragma once\n")
            .with_file("deps/include/SDL2/SDL.h", "#pragma once\n")
            .with_file("examples/basic.c", "int main(void) { return 0; }\n")
            .with_file("examples/bouncing.c", "int main(void) { return 0; }\n")
            .with_file("examples/assets/FiraCode-SemiBold.ttf", "ttf")
            .with_file("examples/assets/logo.png", "png")
            .with_file("examples/assets/sprites/ball.png", "png")
            .with_file("src/core/game.h", "#pragma once\n");

        for source in ENGINE_SOURCES {
            fixture = fixture.with_file(source, "void f(void) {}\n");
        }

        fixture.with_runtime_libraries(Platform::host())
    }

    /// Add prebuilt link and runtime files for `platform`.
    pub fn with_runtime_libraries(mut self, platform: Platform) -> Self {
        for dep in RUNTIME_DEPS {
            let lib = platform.shared_lib_filename(dep);
            self = self
                .with_file(format!("deps/lib/{}/{}", dep, lib), "lib")
                .with_file(format!("deps/bin/{}/{}", dep, lib), "bin");
        }
        self
    }

    /// Add or replace a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Drop a file.
    pub fn without_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.remove(path.as_ref());
        self
    }

    /// Write this fixture to a real directory.
    pub fn write_to(&self, root: &Path) -> std::io::Result<ProjectLayout> {
        for (rel_path, content) in &self.files {
            let full_path = root.join(rel_path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, content)?;
        }
        Ok(ProjectLayout::new(root))
    }

    /// Write this fixture into a fresh temporary directory.
    pub fn write_temp(&self) -> (TempDir, ProjectLayout) {
        let tmp = TempDir::new().unwrap();
        let layout = self.write_to(tmp.path()).unwrap();
        (tmp, layout)
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        ProjectFixture::new()
    }
}
