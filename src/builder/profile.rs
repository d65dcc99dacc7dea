//! Target profile selection.
//!
//! A [`BuildProfile`] is the fully resolved set of toolchain inputs for one
//! target kind. It is computed fresh on every run and never mutated.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::builder::sources::SourceSet;
use crate::core::{Platform, Preset, ProjectLayout, TargetKind};
use crate::util::config::BuildConfig;

/// File name of the generated web host page.
pub const HOST_PAGE_NAME: &str = "index.html";

/// Link-side inputs, which differ in kind between native and web builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Linkage {
    /// Native link against prebuilt runtime libraries.
    Native {
        /// `-L` search paths, one per runtime library
        library_dirs: Vec<PathBuf>,
        /// `-l` directives in link order
        link_flags: Vec<String>,
        /// Runtime libraries shipped next to the artifact
        runtime_libraries: Vec<String>,
    },
    /// Emscripten settings: emulated ports, preload directives.
    Web { extra_toolchain_flags: Vec<String> },
}

/// Fully resolved toolchain inputs for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildProfile {
    target_kind: TargetKind,
    preset: Preset,
    platform: Platform,
    compiler_id: String,
    compiler_flags: Vec<String>,
    source_files: Vec<PathBuf>,
    include_dirs: Vec<PathBuf>,
    linkage: Linkage,
    output_name: String,
}

impl BuildProfile {
    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Compiler executable name (e.g. `gcc`, `emcc`).
    pub fn compiler_id(&self) -> &str {
        &self.compiler_id
    }

    pub fn compiler_flags(&self) -> &[String] {
        &self.compiler_flags
    }

    /// Entry point first, then the engine sources.
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    /// Native library search paths; empty for web builds.
    pub fn library_dirs(&self) -> &[PathBuf] {
        match &self.linkage {
            Linkage::Native { library_dirs, .. } => library_dirs,
            Linkage::Web { .. } => &[],
        }
    }

    /// Native link directives; empty for web builds.
    pub fn link_flags(&self) -> &[String] {
        match &self.linkage {
            Linkage::Native { link_flags, .. } => link_flags,
            Linkage::Web { .. } => &[],
        }
    }

    /// Runtime libraries to stage; empty for web builds.
    pub fn runtime_libraries(&self) -> &[String] {
        match &self.linkage {
            Linkage::Native {
                runtime_libraries, ..
            } => runtime_libraries,
            Linkage::Web { .. } => &[],
        }
    }

    /// Emscripten-only flags; empty for native builds.
    pub fn extra_toolchain_flags(&self) -> &[String] {
        match &self.linkage {
            Linkage::Native { .. } => &[],
            Linkage::Web {
                extra_toolchain_flags,
            } => extra_toolchain_flags,
        }
    }

    /// File name of the compiler output (`lumina`, `lumina.exe`, `lumina.js`).
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Where the compiler is asked to write its output.
    pub fn artifact_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.output_name)
    }
}

/// Build the profile for `kind`.
///
/// Pure: the same inputs always produce the same profile. The platform is
/// passed in rather than detected so other hosts can be simulated.
pub fn select_profile(
    kind: TargetKind,
    preset: Preset,
    layout: &ProjectLayout,
    config: &BuildConfig,
    platform: Platform,
    sources: &SourceSet,
) -> BuildProfile {
    let mut compiler_flags = vec![format!("-std={}", config.native.std), preset.flag().to_string()];
    compiler_flags.extend(config.native.warnings.iter().cloned());

    let stem = config.output_stem(kind);

    let (compiler_id, include_dirs, linkage, output_name) = if kind.is_native() {
        let deps = config.deps.runtime_for(kind);

        let library_dirs = deps.iter().map(|dep| layout.deps_lib_dir(dep)).collect();
        let link_flags = config
            .deps
            .main
            .iter()
            .map(String::as_str)
            .chain(deps.iter().copied())
            .map(|lib| format!("-l{}", lib))
            .chain(platform.rpath_flag().map(String::from))
            .collect();

        (
            config.native.compiler.clone(),
            vec![layout.include_dir(), layout.deps_include_dir()],
            Linkage::Native {
                library_dirs,
                link_flags,
                runtime_libraries: deps.iter().map(|d| d.to_string()).collect(),
            },
            format!("{}{}", stem, platform.exe_suffix()),
        )
    } else {
        (
            config.web.compiler.clone(),
            vec![layout.include_dir()],
            Linkage::Web {
                extra_toolchain_flags: web_flags(layout, config),
            },
            format!("{}.js", stem),
        )
    };

    BuildProfile {
        target_kind: kind,
        preset,
        platform,
        compiler_id,
        compiler_flags,
        source_files: sources.to_vec(),
        include_dirs,
        linkage,
        output_name,
    }
}

/// The asset preload directive, `--preload-file <src>@<mount>`.
pub fn preload_directive(layout: &ProjectLayout, mount: &str) -> [String; 2] {
    [
        "--preload-file".to_string(),
        format!("{}@{}", layout.assets_dir().display(), mount),
    ]
}

fn web_flags(layout: &ProjectLayout, config: &BuildConfig) -> Vec<String> {
    let mut flags = config.web.ports.clone();
    if config.web.image_loading {
        flags.push("-sUSE_SDL_IMAGE=2".to_string());
        flags.push(r#"-sSDL2_IMAGE_FORMATS=["png"]"#.to_string());
    }
    flags.extend(config.web.settings.iter().cloned());
    // Lets the module shut down cleanly when the game loop returns.
    flags.push("-sEXIT_RUNTIME=1".to_string());
    flags.extend(preload_directive(layout, &config.web.asset_mount));
    flags
}
