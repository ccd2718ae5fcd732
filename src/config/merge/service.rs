//! MergeService: orchestrates sources, applies merge policy, deserializes to CheckConfig.

use crate::config::sources::{environment, global_file};
use crate::config::CheckConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources plus an optional explicit file.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<CheckConfig, ConfigError> {
        Self::load_with_global(global_file::global_config_path(), explicit)
    }

    /// Same as [`MergeService::load`] with the global file location supplied by the caller.
    pub fn load_with_global(
        global: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Result<CheckConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global)?;
        let builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
