//! Domain errors for the build pipeline.
//!
//! These are the environment/configuration failures that abort a run.
//! A compiler exiting nonzero is *not* an error here; it is carried as data
//! in [`BuildResult`](crate::builder::invoke::BuildResult).

use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised by the build pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown target `{name}` (expected one of: {})", .known.join(", "))]
    UnknownTarget { name: String, known: Vec<&'static str> },

    #[error("entry point not found: {}", .path.display())]
    MissingEntryPoint { path: PathBuf },

    #[error("runtime library `{name}` not found at {}", .path.display())]
    MissingRuntimeLibrary { name: String, path: PathBuf },

    #[error("failed to bind development server to {addr}: {message}")]
    ServerBind { addr: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_target_lists_known_names() {
        let err = BuildError::UnknownTarget {
            name: "android".to_string(),
            known: vec!["desktop", "web", "examples"],
        };
        assert_eq!(
            err.to_string(),
            "unknown target `android` (expected one of: desktop, web, examples)"
        );
    }

    #[test]
    fn test_missing_library_message() {
        let err = BuildError::MissingRuntimeLibrary {
            name: "SDL2".to_string(),
            path: PathBuf::from("deps/bin/SDL2/SDL2.dll"),
        };
        assert!(err.to_string().contains("`SDL2`"));
        assert!(err.to_string().contains("SDL2.dll"));
    }
}
