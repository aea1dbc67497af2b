//! Skip set: directory names pruned from traversal.
//!
//! A skip set holds bare directory names, not paths. "build" excludes every
//! directory named "build" at any depth, together with its whole subtree.
//! There is no partial-skip mode: a matching directory contributes nothing
//! to a manifest.

use crate::error::ManifestError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Directory names excluded from traversal, subtrees included.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    names: HashSet<String>,
}

impl SkipSet {
    /// Create an empty skip set; nothing is pruned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a skip set from directory names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a skip set from a newline-delimited file of bare directory names.
    ///
    /// Surrounding whitespace is trimmed per line and blank lines are
    /// dropped; every other line is taken verbatim, with no quoting or
    /// comment syntax.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|e| ManifestError::PathAccess {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut names = HashSet::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            names.insert(line.to_string());
        }

        Ok(Self { names })
    }

    /// Whether a directory with this base name is pruned, subtree included.
    pub fn should_prune(&self, directory_name: &str) -> bool {
        self.names.contains(directory_name)
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no names are present.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
