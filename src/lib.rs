//! Treesum: Content-Addressed Tree Manifests
//!
//! Builds manifests of file and directory trees (relative path, size, and
//! SHA-256 digest per file) and compares two manifests into a drift report
//! of modified, source-only, and dest-only entries.

pub mod cli;
pub mod diff;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod skip;
pub mod store;
