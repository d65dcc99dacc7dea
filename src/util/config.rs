//! Static build configuration.
//!
//! Defaults reproduce the engine's stock setup (gcc + SDL2 on desktop,
//! Emscripten on the web). A `lumina.toml` at the project root may override
//! individual values:
//!
//! ```toml
//! [native]
//! compiler = "clang"
//!
//! [web]
//! port = 8080
//!
//! [targets.desktop]
//! entry = "examples/bouncing.c"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::TargetKind;

/// lumina-build configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Native (desktop/example) toolchain settings
    pub native: NativeConfig,

    /// Emscripten toolchain and dev server settings
    pub web: WebConfig,

    /// Prebuilt runtime dependencies
    pub deps: DepsConfig,

    /// Per-target entry point and output overrides
    pub targets: TargetsConfig,
}

/// Native toolchain settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeConfig {
    /// C compiler executable
    pub compiler: String,

    /// Value for `-std=`
    pub std: String,

    /// Warning flags, appended after the preset flag
    pub warnings: Vec<String>,
}

impl Default for NativeConfig {
    fn default() -> Self {
        NativeConfig {
            compiler: "gcc".to_string(),
            std: "gnu11".to_string(),
            warnings: vec!["-Wall".to_string()],
        }
    }
}

/// WebAssembly toolchain and development server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Emscripten compiler driver
    pub compiler: String,

    /// Emulated SDL ports that are always enabled
    pub ports: Vec<String>,

    /// Enable the emulated image-loading port
    pub image_loading: bool,

    /// Additional `-s` settings
    pub settings: Vec<String>,

    /// Mount point of the preloaded asset directory inside the virtual FS
    pub asset_mount: String,

    /// Port of the development server
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            compiler: "emcc".to_string(),
            ports: vec!["-sUSE_SDL=2".to_string(), "-sUSE_SDL_TTF=2".to_string()],
            image_loading: true,
            settings: vec!["-sALLOW_MEMORY_GROWTH=1".to_string()],
            asset_mount: "/assets".to_string(),
            port: 8000,
        }
    }
}

/// Prebuilt runtime dependencies under `deps/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepsConfig {
    /// Libraries linked and shipped next to native artifacts, in link order
    pub runtime: Vec<String>,

    /// The image-loading library, omitted by the example harness
    pub image: String,

    /// Static entry-point shim linked before the runtime libraries
    pub main: Option<String>,
}

impl Default for DepsConfig {
    fn default() -> Self {
        DepsConfig {
            runtime: vec![
                "SDL2".to_string(),
                "SDL2_ttf".to_string(),
                "SDL2_image".to_string(),
            ],
            image: "SDL2_image".to_string(),
            main: Some("SDL2main".to_string()),
        }
    }
}

impl DepsConfig {
    /// Runtime libraries needed by a target kind.
    pub fn runtime_for(&self, kind: TargetKind) -> Vec<&str> {
        self.runtime
            .iter()
            .map(String::as_str)
            .filter(|dep| kind != TargetKind::Example || *dep != self.image)
            .collect()
    }
}

/// Per-target overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetsConfig {
    pub desktop: TargetOverride,
    pub web: TargetOverride,
    #[serde(alias = "examples")]
    pub example: TargetOverride,
}

/// Entry point and output stem for one target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOverride {
    /// Entry-point source, relative to the project root
    pub entry: Option<PathBuf>,

    /// Output file name without extension
    pub output: Option<String>,
}

impl BuildConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, using defaults if the file doesn't exist.
    ///
    /// A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn target(&self, kind: TargetKind) -> &TargetOverride {
        match kind {
            TargetKind::Desktop => &self.targets.desktop,
            TargetKind::Web => &self.targets.web,
            TargetKind::Example => &self.targets.example,
        }
    }

    /// Entry-point source for a target, relative to the project root.
    pub fn entry_point(&self, kind: TargetKind) -> PathBuf {
        self.target(kind).entry.clone().unwrap_or_else(|| {
            let file = match kind {
                TargetKind::Desktop => "bouncing.c",
                TargetKind::Web | TargetKind::Example => "basic.c",
            };
            Path::new("examples").join(file)
        })
    }

    /// Output file name without extension.
    pub fn output_stem(&self, kind: TargetKind) -> String {
        self.target(kind).output.clone().unwrap_or_else(|| {
            match kind {
                TargetKind::Desktop | TargetKind::Web => "lumina",
                TargetKind::Example => "lumina_example",
            }
            .to_string()
        })
    }
}
