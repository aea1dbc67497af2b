//! Path normalization for manifest-relative paths

use crate::error::ManifestError;
use std::path::{Component, Path, PathBuf};

/// Make a path absolute without resolving symlinks
///
/// Relative paths are joined onto the current working directory, then the
/// result is normalized lexically. The filesystem is never consulted beyond
/// the working-directory lookup, so symlink targets stay unresolved.
pub fn absolutize(path: &Path) -> Result<PathBuf, ManifestError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| ManifestError::PathAccess {
            path: path.to_path_buf(),
            source: e,
        })?;
        cwd.join(path)
    };
    Ok(lexical_normalize(&joined))
}

/// Resolve `.` and `..` components lexically, without filesystem access
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !components.is_empty()
                    && !matches!(
                        components.last(),
                        Some(Component::ParentDir) | Some(Component::RootDir)
                    )
                {
                    components.pop();
                } else {
                    components.push(component);
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

/// Render a path with forward-slash separators
///
/// Manifest paths are stored in this form regardless of the host platform's
/// native separator.
pub fn to_posix_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
