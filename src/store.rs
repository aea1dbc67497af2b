//! JSON persistence for manifests and diff reports.
//!
//! Artifacts are written compact and created fresh on every write (the
//! destination is truncated, never appended), so a read always sees exactly
//! one serialized document.

use crate::diff::DiffReport;
use crate::error::ManifestError;
use crate::manifest::Manifest;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Read a manifest from a JSON file
///
/// A file that cannot be opened is `PathAccess`; content that does not parse
/// as a manifest is `Serialization`.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let file = File::open(path).map_err(|e| ManifestError::PathAccess {
        path: path.to_path_buf(),
        source: e,
    })?;

    let manifest =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| ManifestError::Serialization {
            path: path.to_path_buf(),
            detail: format!("Failed to parse manifest: {}", e),
        })?;

    debug!(path = %path.display(), "Read manifest");
    Ok(manifest)
}

/// Write a manifest to a JSON file, replacing any previous contents
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    write_json(manifest, path, "manifest")
}

/// Write a diff report to a JSON file, replacing any previous contents
pub fn write_report(report: &DiffReport, path: &Path) -> Result<(), ManifestError> {
    write_json(report, path, "report")
}

fn write_json<T: Serialize>(value: &T, path: &Path, what: &str) -> Result<(), ManifestError> {
    let file = File::create(path).map_err(|e| ManifestError::Serialization {
        path: path.to_path_buf(),
        detail: format!("Failed to create {}: {}", what, e),
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|e| ManifestError::Serialization {
        path: path.to_path_buf(),
        detail: format!("Failed to serialize {}: {}", what, e),
    })?;
    writer.flush().map_err(|e| ManifestError::Serialization {
        path: path.to_path_buf(),
        detail: format!("Failed to write {}: {}", what, e),
    })?;

    debug!(path = %path.display(), "Wrote {}", what);
    Ok(())
}
