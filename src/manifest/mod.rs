//! Content-addressed manifests
//!
//! A manifest records, for every regular file under a build root, its
//! root-relative path, size in bytes, and SHA-256 content digest. Manifests
//! are built once, persisted as JSON, and later compared pairwise to detect
//! drift between trees without touching the original filesystems.

pub mod builder;
pub mod hasher;
pub mod path;
pub mod walker;

use serde::{Deserialize, Serialize};

/// One regular file recorded in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the build root, forward-slash separated
    #[serde(rename = "path")]
    pub relative_path: String,
    /// Size in bytes from filesystem metadata
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Lowercase hex SHA-256 of the file contents
    #[serde(rename = "sha256")]
    pub digest: String,
}

impl std::fmt::Display for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sha256:{} {} {}",
            self.digest, self.size_bytes, self.relative_path
        )
    }
}

/// A complete manifest of one build root
///
/// `is_directory` records whether the build target was a directory or a
/// single file. A single-file manifest holds exactly one entry carrying the
/// file's base name; a directory manifest lists entries in traversal order.
/// Manifests are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// True when the build root was a directory
    #[serde(rename = "dir")]
    pub is_directory: bool,
    /// Recorded files, in traversal order
    #[serde(rename = "files")]
    pub entries: Vec<FileEntry>,
}
