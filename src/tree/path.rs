//! Relative path keys used to join the two trees

use crate::error::TreeError;
use std::path::{Component, Path, PathBuf};

/// Compute the key of `path` relative to `root`.
///
/// The key keeps only normal components, so `a/./b` and `a/b` join to the same entry.
pub fn relative_key(root: &Path, path: &Path) -> Result<PathBuf, TreeError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        TreeError::InvalidPath(format!(
            "{} is not under root {}",
            path.display(),
            root.display()
        ))
    })?;

    let key: PathBuf = relative
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();

    if key.as_os_str().is_empty() {
        return Err(TreeError::InvalidPath(format!(
            "{} has no path relative to {}",
            path.display(),
            root.display()
        )));
    }

    Ok(key)
}

/// Render a relative key with `/` separators on every platform.
pub fn display_key(key: &Path) -> String {
    key.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
