//! CLI route: single route table and run context. Dispatches to the comparison core and reporter.

use crate::cli::output::{EXIT_MISMATCH, EXIT_OK};
use crate::cli::parse::{Commands, CompareArgs, HashArgs};
use crate::config::{resolve_roots, CheckConfig, ConfigLoader};
use crate::diff::compare_trees;
use crate::error::CheckError;
use crate::report::Reporter;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Result of a successful command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Paths that were not a match
    pub mismatches: usize,
    fail_on_mismatch: bool,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.fail_on_mismatch && self.mismatches > 0 {
            EXIT_MISMATCH
        } else {
            EXIT_OK
        }
    }
}

/// Runtime context for CLI execution: the merged configuration.
pub struct RunContext {
    config: CheckConfig,
}

impl RunContext {
    /// Load configuration from standard sources plus an optional explicit file.
    pub fn load_config(config_path: Option<&Path>) -> Result<CheckConfig, CheckError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(config)
    }

    /// Create a run context from an already-merged configuration.
    ///
    /// Validation waits until a command has layered its flags on top.
    pub fn from_config(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Execute a command, writing its output to `out`.
    pub fn execute<W: Write>(
        &self,
        command: Option<&Commands>,
        out: W,
    ) -> Result<RunOutcome, CheckError> {
        match command {
            None => self.compare(&CompareArgs::default(), out),
            Some(Commands::Compare(args)) => self.compare(args, out),
            Some(Commands::Hash(args)) => self.hash(args, out),
        }
    }

    fn compare<W: Write>(&self, args: &CompareArgs, out: W) -> Result<RunOutcome, CheckError> {
        let mut config = self.config.clone();
        if let Some(algorithm) = args.algorithm {
            config.hashing.algorithm = algorithm;
        }
        if let Some(chunk_size) = args.chunk_size {
            config.hashing.chunk_size = chunk_size;
        }
        if let Some(format) = args.format {
            config.report.format = format;
        }
        config.report.summary |= args.summary;
        config.report.fail_on_mismatch |= args.fail_on_mismatch;
        config.walk.follow_symlinks |= args.follow_symlinks;
        config
            .walk
            .ignore_patterns
            .extend(args.ignore.iter().cloned());
        validate(&config)?;

        let (first, second) = resolve_roots(&config.roots, args.first.clone(), args.second.clone())?;
        info!(first = %first.display(), second = %second.display(), "Comparing trees");

        let comparison = compare_trees(&first, &second, &config.compare_options())?;

        let mut reporter = Reporter::new(out, &config.report);
        reporter
            .write_comparison(&comparison)
            .map_err(CheckError::Output)?;

        Ok(RunOutcome {
            mismatches: comparison.summary().mismatches(),
            fail_on_mismatch: config.report.fail_on_mismatch,
        })
    }

    fn hash<W: Write>(&self, args: &HashArgs, mut out: W) -> Result<RunOutcome, CheckError> {
        let mut hashing = self.config.hashing.clone();
        if let Some(algorithm) = args.algorithm {
            hashing.algorithm = algorithm;
        }
        if let Some(chunk_size) = args.chunk_size {
            hashing.chunk_size = chunk_size;
        }
        hashing
            .validate()
            .map_err(|e| CheckError::Config(e.to_string()))?;
        let hasher = hashing.hasher();

        for path in &args.paths {
            let digest = hasher.hash_file(path)?;
            debug!(path = %path.display(), algorithm = ?hasher.algorithm(), "Hashed file");
            writeln!(out, "{}  {}", digest, path.display()).map_err(CheckError::Output)?;
        }
        out.flush().map_err(CheckError::Output)?;

        Ok(RunOutcome {
            mismatches: 0,
            fail_on_mismatch: false,
        })
    }
}

fn validate(config: &CheckConfig) -> Result<(), CheckError> {
    config.validate().map_err(|errors| {
        CheckError::Config(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        )
    })
}
