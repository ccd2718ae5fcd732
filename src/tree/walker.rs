//! Filesystem walker that snapshots every regular file under a root

use crate::error::TreeError;
use crate::tree::path;
use crate::types::Snapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Descend into symlinked directories (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Entry names to skip together with their subtrees (e.g. ".git")
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: impl Into<PathBuf>, config: WalkerConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Walk the tree and map each file's relative path to its absolute path.
    ///
    /// Directories are traversed but never emitted. Any unreadable directory
    /// aborts the walk.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn snapshot(&self) -> Result<Snapshot, TreeError> {
        let start = Instant::now();
        let root = self.resolve_root()?;

        let mut snapshot = Snapshot::new();
        let mut directories = 0usize;
        let mut skipped = 0usize;

        let walker = WalkDir::new(&root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|entry| !self.should_ignore(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    warn!(path = ?err.path(), "Skipping dangling symlink");
                    skipped += 1;
                    continue;
                }
                Err(err) => return Err(TreeError::from_walk(&root, err)),
            };

            // The root itself is not an entry
            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                directories += 1;
                continue;
            }

            let is_file = if file_type.is_symlink() {
                match self.resolve_link(entry.path())? {
                    Some(target_is_file) => target_is_file,
                    None => {
                        skipped += 1;
                        continue;
                    }
                }
            } else {
                file_type.is_file()
            };

            if !is_file {
                debug!(path = %entry.path().display(), "Skipping special file");
                skipped += 1;
                continue;
            }

            let key = path::relative_key(&root, entry.path())?;
            trace!(key = %path::display_key(&key), "Collected file");
            snapshot.insert(key, entry.into_path());
        }

        info!(
            files = snapshot.len(),
            directories,
            skipped,
            duration_ms = start.elapsed().as_millis(),
            "Tree walk completed"
        );

        Ok(snapshot)
    }

    /// Canonicalize the root and check it is a directory
    fn resolve_root(&self) -> Result<PathBuf, TreeError> {
        let root = dunce::canonicalize(&self.root).map_err(|e| TreeError::from_io(&self.root, e))?;
        let metadata = fs::metadata(&root).map_err(|e| TreeError::from_io(&root, e))?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(self.root.clone()));
        }
        Ok(root)
    }

    /// Resolve a symlink that walkdir did not follow.
    ///
    /// Returns `Some(true)` for a link to a regular file, `Some(false)` for
    /// any other target, and `None` when the link dangles.
    fn resolve_link(&self, link: &Path) -> Result<Option<bool>, TreeError> {
        match fs::metadata(link) {
            Ok(target) => {
                if target.is_dir() {
                    debug!(path = %link.display(), "Not descending into symlinked directory");
                }
                Ok(Some(target.is_file()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %link.display(), "Skipping dangling symlink");
                Ok(None)
            }
            Err(e) => Err(TreeError::from_io(link, e)),
        }
    }

    /// Check if an entry should be ignored based on ignore patterns
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || self.config.ignore_patterns.is_empty() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.as_str() == name)
    }
}

/// A followed link whose target is gone surfaces as a NotFound walk error
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .map(|e| e.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false);
    let is_link = err
        .path()
        .and_then(|p| fs::symlink_metadata(p).ok())
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    err.depth() > 0 && not_found && is_link
}
