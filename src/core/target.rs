//! Target kinds, build presets, and host platform identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::BuildError;

/// Which environment a build produces an artifact for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Full engine build against native SDL2 libraries.
    Desktop,
    /// WebAssembly build through Emscripten.
    Web,
    /// Lightweight example harness (no image-loading dependency).
    Example,
}

impl TargetKind {
    /// Names accepted on the command line.
    pub const KNOWN: &'static [&'static str] = &["desktop", "web", "examples"];

    /// Get the target kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Desktop => "desktop",
            TargetKind::Web => "web",
            TargetKind::Example => "example",
        }
    }

    /// Whether this target links against native runtime libraries.
    pub fn is_native(&self) -> bool {
        !matches!(self, TargetKind::Web)
    }
}

impl std::str::FromStr for TargetKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "desktop" => Ok(TargetKind::Desktop),
            "web" => Ok(TargetKind::Web),
            "examples" | "example" => Ok(TargetKind::Example),
            _ => Err(BuildError::UnknownTarget {
                name: s.to_string(),
                known: Self::KNOWN.to_vec(),
            }),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named optimization preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Full debug info, no optimization flag.
    #[default]
    Debug,
    /// Optimized build.
    Release,
}

impl Preset {
    pub fn from_release_flag(release: bool) -> Self {
        if release {
            Preset::Release
        } else {
            Preset::Debug
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Debug => "debug",
            Preset::Release => "release",
        }
    }

    /// The compiler flag that distinguishes this preset.
    pub fn flag(&self) -> &'static str {
        match self {
            Preset::Debug => "-g3",
            Preset::Release => "-O3",
        }
    }
}

/// Host platform family.
///
/// Detected at runtime via [`Platform::host`], but passed explicitly through
/// the pipeline so other platforms can be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Suffix appended to native executables.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::MacOs | Platform::Linux => "",
        }
    }

    /// File name of a prebuilt shared library, e.g. `SDL2.dll` or `libSDL2.so`.
    pub fn shared_lib_filename(&self, name: &str) -> String {
        match self {
            Platform::Windows => format!("{}.dll", name),
            Platform::MacOs => format!("lib{}.dylib", name),
            Platform::Linux => format!("lib{}.so", name),
        }
    }

    /// Linker flag that makes the loader search the executable's directory
    /// for shared libraries. Windows does that without being asked.
    pub fn rpath_flag(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => None,
            Platform::MacOs => Some("-Wl,-rpath,@executable_path"),
            Platform::Linux => Some("-Wl,-rpath,$ORIGIN"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
