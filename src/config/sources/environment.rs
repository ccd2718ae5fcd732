//! Environment variable source: TREECHECK_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses TREECHECK__ prefix and __ as separator for nested keys,
/// e.g. `TREECHECK__HASHING__ALGORITHM=md5`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TREECHECK")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
