//! CLI output: error mapping and one-line command summaries.

use crate::diff::DiffReport;
use crate::error::CommandError;
use crate::manifest::Manifest;
use std::path::Path;

/// Map domain/service errors to a string for CLI output.
/// Keeps route handlers thin; extend with stable categories if needed.
pub fn map_error(e: &CommandError) -> String {
    e.to_string()
}

/// One-line summary for a completed generate.
pub fn format_generate_summary(manifest: &Manifest, output: &Path) -> String {
    let root_kind = if manifest.is_directory {
        "directory"
    } else {
        "file"
    };
    format!(
        "Manifest written to {} ({} entries, {} root)",
        output.display(),
        manifest.entries.len(),
        root_kind
    )
}

/// One-line summary for a completed compare.
pub fn format_compare_summary(report: &DiffReport, output: &Path) -> String {
    if report.is_empty() {
        return format!(
            "Report written to {} (manifests identical)",
            output.display()
        );
    }
    format!(
        "Report written to {} ({} modified, {} source-only, {} dest-only)",
        output.display(),
        report.modified.len(),
        report.source_only.len(),
        report.dest_only.len()
    )
}
