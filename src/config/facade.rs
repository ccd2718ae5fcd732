//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CheckConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<CheckConfig, ConfigError> {
        MergeService::load(None)
    }

    /// Load configuration with an explicit file layered over the global file.
    pub fn load_from_file(path: &Path) -> Result<CheckConfig, ConfigError> {
        MergeService::load(Some(path))
    }
}
