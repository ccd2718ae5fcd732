//! Root resolution: explicit paths, then `$SDISK_HOME`-style defaults.
//!
//! The comparison core takes two plain paths; this is the only place that
//! consults the environment to find them.

use crate::config::{RootsConfig, ValidationError};
use crate::error::CheckError;
use std::path::PathBuf;
use tracing::debug;

/// Resolve both roots, reading the home variable from the process environment.
pub fn resolve_roots(
    roots: &RootsConfig,
    first: Option<PathBuf>,
    second: Option<PathBuf>,
) -> Result<(PathBuf, PathBuf), CheckError> {
    resolve_roots_with(roots, first, second, |var| std::env::var_os(var).map(PathBuf::from))
}

/// Resolve both roots with a caller-supplied environment lookup.
///
/// Precedence per side: the `first`/`second` argument, then the configured
/// path, then `<home>/<subdir>`. The lookup only runs when a side still
/// needs the home directory.
pub fn resolve_roots_with<F>(
    roots: &RootsConfig,
    first: Option<PathBuf>,
    second: Option<PathBuf>,
    lookup: F,
) -> Result<(PathBuf, PathBuf), CheckError>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let first = first.or_else(|| roots.first.clone());
    let second = second.or_else(|| roots.second.clone());

    let home = if first.is_none() || second.is_none() {
        if roots.home_var.trim().is_empty() {
            return Err(invalid_roots("home_var cannot be empty"));
        }
        let home = lookup(&roots.home_var)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| CheckError::HomeNotSet(roots.home_var.clone()))?;
        debug!(var = %roots.home_var, home = %home.display(), "Resolved home directory");
        Some(home)
    } else {
        None
    };

    let pick = |explicit: Option<PathBuf>, subdir: &str, field: &str| match (explicit, &home) {
        (Some(path), _) => Ok(path),
        (None, Some(_)) if subdir.is_empty() => {
            Err(invalid_roots(&format!("{} cannot be empty", field)))
        }
        (None, Some(home)) => Ok(home.join(subdir)),
        (None, None) => Err(CheckError::HomeNotSet(roots.home_var.clone())),
    };

    Ok((
        pick(first, &roots.first_subdir, "first_subdir")?,
        pick(second, &roots.second_subdir, "second_subdir")?,
    ))
}

fn invalid_roots(msg: &str) -> CheckError {
    CheckError::Config(ValidationError::Roots(msg.to_string()).to_string())
}
