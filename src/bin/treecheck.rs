//! Treecheck CLI Binary
//!
//! Command-line interface for comparing two mirrored directory trees.

use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};
use treecheck::cli::{map_error, Cli, RunContext, EXIT_ERROR};
use treecheck::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let config = match RunContext::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    };

    // Initialize logging before any tree access
    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_ERROR);
    }

    info!("Treecheck starting");

    let context = RunContext::from_config(config);

    let stdout = io::stdout();
    match context.execute(cli.command.as_ref(), stdout.lock()) {
        Ok(outcome) => {
            info!(mismatches = outcome.mismatches, "Command completed successfully");
            process::exit(outcome.exit_code());
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config file
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    // Without --verbose or an explicit level, logging stays off
    if !cli.verbose && cli.log_level.is_none() {
        config.level = "off".to_string();
        return config;
    }

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    } else if cli.verbose && config.level == "info" {
        config.level = "debug".to_string();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
