//! Configuration System
//!
//! Layered configuration for comparison runs: merge-policy defaults, the
//! global config file, an explicit `--config` file, then `TREECHECK__*`
//! environment overrides. CLI flags are applied last by the caller.

use crate::diff::CompareOptions;
use crate::logging::LoggingConfig;
use crate::report::ReportConfig;
use crate::tree::{FileHasher, HashAlgorithm, WalkerConfig, DEFAULT_CHUNK_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
pub mod sources;

pub use facade::ConfigLoader;
pub use sources::home_roots::resolve_roots;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Where the two trees live
    #[serde(default)]
    pub roots: RootsConfig,

    #[serde(default)]
    pub hashing: HashingConfig,

    #[serde(default)]
    pub walk: WalkerConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree root selection
///
/// Explicit `first`/`second` win; otherwise each root is
/// `$<home_var>/<subdir>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootsConfig {
    #[serde(default)]
    pub first: Option<PathBuf>,

    #[serde(default)]
    pub second: Option<PathBuf>,

    #[serde(default = "default_home_var")]
    pub home_var: String,

    #[serde(default = "default_first_subdir")]
    pub first_subdir: String,

    #[serde(default = "default_second_subdir")]
    pub second_subdir: String,
}

pub(crate) fn default_home_var() -> String {
    "SDISK_HOME".to_string()
}

pub(crate) fn default_first_subdir() -> String {
    "users".to_string()
}

pub(crate) fn default_second_subdir() -> String {
    "client_root".to_string()
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
            home_var: default_home_var(),
            first_subdir: default_first_subdir(),
            second_subdir: default_second_subdir(),
        }
    }
}

/// Content hashing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Read buffer size in bytes
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl HashingConfig {
    pub fn hasher(&self) -> FileHasher {
        FileHasher::new(self.algorithm).with_chunk_size(self.chunk_size)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chunk_size == 0 {
            return Err(ValidationError::Hashing("chunk_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Roots(String),
    Hashing(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Roots(msg) => write!(f, "Roots: {}", msg),
            ValidationError::Hashing(msg) => write!(f, "Hashing: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CheckConfig {
    /// Validate settings shared by every command.
    ///
    /// Root settings are checked when roots are resolved, once CLI paths are
    /// known.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.hashing.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Options for the core comparison routine
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            hasher: self.hashing.hasher(),
            walker: self.walk.clone(),
        }
    }
}
