//! Error types for manifest construction, comparison, and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Which input manifest a comparison failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Dest,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Dest => write!(f, "dest"),
        }
    }
}

/// Build- and persistence-related errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Cannot access {path:?}: {source}")]
    PathAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Traversal failed at {path:?}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate relative path under build root: {path}")]
    DuplicateEntry { path: String },

    #[error("Serialization failed for {path:?}: {detail}")]
    Serialization { path: PathBuf, detail: String },
}

/// Comparison-related errors
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Manifest type mismatch: source is_directory={source_is_directory}, dest is_directory={dest_is_directory}")]
    TypeMismatch {
        source_is_directory: bool,
        dest_is_directory: bool,
    },

    #[error("Duplicate entry in {side} manifest: {path}")]
    DuplicateEntry { side: Side, path: String },
}

/// Command-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Diff error: {0}")]
    Diff(#[from] DiffError),

    #[error("Configuration error: {0}")]
    Config(String),
}
