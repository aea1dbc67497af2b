//! Manifest comparison: classify drift between two manifests.
//!
//! Comparison is pure set algebra over the two entry maps: paths present on
//! both sides with differing size or digest are modified, and the remainder
//! fall into source-only or dest-only. Identical entries never appear in the
//! report. No filesystem access happens here; the inputs are the only data
//! consulted.

use crate::error::{DiffError, Side};
use crate::manifest::{FileEntry, Manifest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// A path present in both manifests with differing content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedPair {
    /// The entry as the source manifest records it
    #[serde(rename = "src")]
    pub source: FileEntry,
    /// The entry as the dest manifest records it
    #[serde(rename = "dst")]
    pub dest: FileEntry,
}

/// Result of comparing a source manifest against a dest manifest
///
/// All three collections are sorted by relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Paths on both sides whose size or digest differs
    #[serde(rename = "diff")]
    pub modified: Vec<ModifiedPair>,
    /// Paths recorded only in the source manifest
    #[serde(rename = "src_only")]
    pub source_only: Vec<FileEntry>,
    /// Paths recorded only in the dest manifest
    #[serde(rename = "dst_only")]
    pub dest_only: Vec<FileEntry>,
}

impl DiffReport {
    /// True when the two manifests held identical content
    pub fn is_empty(&self) -> bool {
        self.modified.is_empty() && self.source_only.is_empty() && self.dest_only.is_empty()
    }
}

/// Compare two manifests
///
/// Fails with `TypeMismatch` when one manifest describes a directory and the
/// other a single file, and with `DuplicateEntry` when either manifest
/// repeats a relative path (a corrupt manifest, never resolved by
/// last-write-wins).
#[instrument(skip(source, dest), fields(source_entries = source.entries.len(), dest_entries = dest.entries.len()))]
pub fn diff(source: &Manifest, dest: &Manifest) -> Result<DiffReport, DiffError> {
    if source.is_directory != dest.is_directory {
        return Err(DiffError::TypeMismatch {
            source_is_directory: source.is_directory,
            dest_is_directory: dest.is_directory,
        });
    }

    let source_index = index_entries(source, Side::Source)?;
    let dest_index = index_entries(dest, Side::Dest)?;

    let mut report = DiffReport::default();

    // First pass: every source path, split against dest.
    for (path, source_entry) in &source_index {
        match dest_index.get(path) {
            Some(dest_entry) if entries_match(source_entry, dest_entry) => {}
            Some(dest_entry) => report.modified.push(ModifiedPair {
                source: (*source_entry).clone(),
                dest: (*dest_entry).clone(),
            }),
            None => report.source_only.push((*source_entry).clone()),
        }
    }

    // Second pass: paths only dest has.
    for (path, dest_entry) in &dest_index {
        if !source_index.contains_key(path) {
            report.dest_only.push((*dest_entry).clone());
        }
    }

    debug!(
        modified = report.modified.len(),
        source_only = report.source_only.len(),
        dest_only = report.dest_only.len(),
        "Manifest comparison completed"
    );

    Ok(report)
}

/// Index one manifest's entries by relative path, rejecting repeats
fn index_entries<'a>(
    manifest: &'a Manifest,
    side: Side,
) -> Result<BTreeMap<&'a str, &'a FileEntry>, DiffError> {
    let mut index = BTreeMap::new();
    for entry in &manifest.entries {
        if index.insert(entry.relative_path.as_str(), entry).is_some() {
            return Err(DiffError::DuplicateEntry {
                side,
                path: entry.relative_path.clone(),
            });
        }
    }
    Ok(index)
}

/// Identical means equal size and equal digest
fn entries_match(a: &FileEntry, b: &FileEntry) -> bool {
    a.size_bytes == b.size_bytes && a.digest == b.digest
}
