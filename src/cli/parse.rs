//! CLI parse: clap types for treecheck. No behavior; definitions only.

use crate::report::ReportFormat;
use crate::tree::HashAlgorithm;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// treecheck - verify that two mirrored directory trees hold the same files
#[derive(Parser)]
#[command(name = "treecheck")]
#[command(about = "Compare two directory trees file by file using content hashes")]
#[command(version)]
pub struct Cli {
    /// Command to run (defaults to `compare`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (layered over the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two trees and report every file's status
    Compare(CompareArgs),
    /// Print the content digest of one or more files
    Hash(HashArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompareArgs {
    /// First tree (default: $SDISK_HOME/users)
    pub first: Option<PathBuf>,

    /// Second tree (default: $SDISK_HOME/client_root)
    pub second: Option<PathBuf>,

    /// Digest algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Read buffer size in bytes
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Append a summary line with per-status counts
    #[arg(long)]
    pub summary: bool,

    /// Exit with status 1 when any file does not match
    #[arg(long)]
    pub fail_on_mismatch: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip entries with this name, including their subtrees (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct HashArgs {
    /// Files to hash
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Digest algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<HashAlgorithm>,

    /// Read buffer size in bytes
    #[arg(long)]
    pub chunk_size: Option<usize>,
}
