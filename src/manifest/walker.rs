//! Filesystem walker for deterministic manifest traversal

use crate::error::ManifestError;
use crate::skip::SkipSet;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// A regular file discovered during traversal
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Path as reported by the walk, rooted at the walker's root
    pub path: PathBuf,
    /// Size in bytes from filesystem metadata
    pub size: u64,
}

/// Depth-first walker over a directory root
///
/// Entries are visited in lexicographic order within each directory, so the
/// file sequence is stable across runs. Directories whose base name is in
/// the skip set are pruned whole, the root included. Symbolic links are not
/// followed and are never reported.
pub struct Walker {
    root: PathBuf,
    skip: SkipSet,
}

impl Walker {
    /// Create a walker with no pruning
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            skip: SkipSet::new(),
        }
    }

    /// Create a walker that prunes directories named in the skip set
    pub fn with_skip_set(root: PathBuf, skip: SkipSet) -> Self {
        Self { root, skip }
    }

    /// Walk the tree and collect every regular file in traversal order
    ///
    /// Any I/O failure aborts the walk; no partial listing is returned.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, ManifestError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.should_prune(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| self.root.clone());
                ManifestError::Traversal {
                    path,
                    source: e.into(),
                }
            })?;

            // Directories are never recorded; symlinks are skipped.
            if !entry.file_type().is_file() {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| ManifestError::Traversal {
                path: entry.path().to_path_buf(),
                source: e.into(),
            })?;

            files.push(WalkedFile {
                path: entry.path().to_path_buf(),
                size: metadata.len(),
            });
        }

        Ok(files)
    }

    /// Prune decision for one entry: only directories are candidates, and
    /// only their base name is consulted
    fn should_prune(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.skip.should_prune(name))
                .unwrap_or(false)
    }
}
