//! Manifest builder: walks a build root and records every file's digest

use crate::error::ManifestError;
use crate::manifest::walker::Walker;
use crate::manifest::{hasher, path};
use crate::manifest::{FileEntry, Manifest};
use crate::skip::SkipSet;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Builds a manifest from a root path
///
/// The root may be a regular file or a directory. A directory root is
/// traversed depth-first, lexicographic within each directory; a file root
/// produces a single-entry manifest keyed by the file's base name. Every
/// build either completes fully or fails without returning anything.
pub struct ManifestBuilder {
    root: PathBuf,
    skip: SkipSet,
    verbose: bool,
}

impl ManifestBuilder {
    /// Create a builder with an empty skip set
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            skip: SkipSet::new(),
            verbose: false,
        }
    }

    /// Prune directories named in the skip set during traversal
    pub fn with_skip_set(mut self, skip: SkipSet) -> Self {
        self.skip = skip;
        self
    }

    /// Emit an info-level line for every file read
    ///
    /// Purely observational; the returned manifest is identical either way.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the manifest
    ///
    /// Fails with `PathAccess` when the root is missing or unreadable, and
    /// with `Traversal` on any I/O error under a directory root. Two walked
    /// names rendering to the same relative path fail with
    /// `DuplicateEntry`.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Manifest, ManifestError> {
        let start = Instant::now();
        info!("Starting manifest build");

        let metadata =
            std::fs::symlink_metadata(&self.root).map_err(|e| ManifestError::PathAccess {
                path: self.root.clone(),
                source: e,
            })?;

        let manifest = if metadata.is_dir() {
            self.build_directory()?
        } else {
            self.build_single_file(metadata.len())?
        };

        let duration = start.elapsed();
        info!(
            entry_count = manifest.entries.len(),
            duration_ms = duration.as_millis(),
            "Manifest build completed"
        );

        Ok(manifest)
    }

    /// Manifest for a file root: one entry under the file's base name
    ///
    /// The base name (not a root-relative path) is what a file manifest
    /// carries, so renaming the file changes the entry's identity.
    fn build_single_file(&self, size: u64) -> Result<Manifest, ManifestError> {
        let name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.to_string_lossy().into_owned());

        self.trace_read(&self.root);
        let digest = hasher::hash_file(&self.root).map_err(|e| ManifestError::PathAccess {
            path: self.root.clone(),
            source: e,
        })?;

        Ok(Manifest {
            is_directory: false,
            entries: vec![FileEntry {
                relative_path: name,
                size_bytes: size,
                digest,
            }],
        })
    }

    /// Manifest for a directory root: walk, hash, and record every file
    fn build_directory(&self) -> Result<Manifest, ManifestError> {
        let abs_root = path::absolutize(&self.root)?;

        let walker = Walker::with_skip_set(self.root.clone(), self.skip.clone());
        let files = walker.walk()?;
        debug!(file_count = files.len(), "Walked build root");

        let mut entries = Vec::with_capacity(files.len());
        let mut seen = HashSet::with_capacity(files.len());
        for file in files {
            let abs_path = path::absolutize(&file.path)?;
            let relative =
                abs_path
                    .strip_prefix(&abs_root)
                    .map_err(|_| ManifestError::Traversal {
                        path: file.path.clone(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::Other,
                            format!("Walked path escapes build root {:?}", abs_root),
                        ),
                    })?;

            // Rendering non-UTF-8 names can collapse distinct directory
            // entries into one relative path; a repeat is fatal, never
            // silently deduplicated.
            let relative_path = path::to_posix_string(relative);
            if !seen.insert(relative_path.clone()) {
                return Err(ManifestError::DuplicateEntry {
                    path: relative_path,
                });
            }

            self.trace_read(&abs_path);
            let digest = hasher::hash_file(&file.path).map_err(|e| ManifestError::Traversal {
                path: file.path.clone(),
                source: e,
            })?;

            entries.push(FileEntry {
                relative_path,
                size_bytes: file.size,
                digest,
            });
        }

        Ok(Manifest {
            is_directory: true,
            entries,
        })
    }

    fn trace_read(&self, path: &Path) {
        if self.verbose {
            info!(path = %path.display(), "reading file");
        } else {
            trace!(path = %path.display(), "reading file");
        }
    }
}
