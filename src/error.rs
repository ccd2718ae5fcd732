//! Error types for tree comparison.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filesystem errors raised while walking or hashing a tree
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Symlink loop detected at {0}")]
    SymlinkLoop(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Classify an I/O error raised for `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path.to_path_buf()),
            _ => TreeError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classify a traversal error. Falls back to `root` when walkdir carries no path.
    pub fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        if let Some(ancestor) = err.loop_ancestor() {
            return TreeError::SymlinkLoop(ancestor.to_path_buf());
        }
        match err.into_io_error() {
            Some(io_err) => TreeError::from_io(&path, io_err),
            None => TreeError::InvalidPath(format!("Failed to walk {}", path.display())),
        }
    }
}

/// Top-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable {0} is not set; pass both roots explicitly or export it")]
    HomeNotSet(String),

    #[error("Failed to write report: {0}")]
    Output(#[source] io::Error),
}

impl From<config::ConfigError> for CheckError {
    fn from(err: config::ConfigError) -> Self {
        CheckError::Config(err.to_string())
    }
}
