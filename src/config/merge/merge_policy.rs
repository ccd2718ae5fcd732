//! Merge rules: defaults, override order, conflict handling.

use crate::config::{default_first_subdir, default_home_var, default_second_subdir};
use crate::tree::DEFAULT_CHUNK_SIZE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("roots.home_var", default_home_var())?
        .set_default("roots.first_subdir", default_first_subdir())?
        .set_default("roots.second_subdir", default_second_subdir())?
        .set_default("hashing.algorithm", "blake3")?
        .set_default("hashing.chunk_size", DEFAULT_CHUNK_SIZE as u64)?
        .set_default("report.format", "text")
}
