//! Treecheck: Directory Tree Verification
//!
//! Compares two directory trees that are expected to mirror each other and
//! classifies every file path as matching, differing, or missing on one side.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod report;
pub mod tree;
pub mod types;

pub use diff::{
    compare_snapshots, compare_trees, Classification, CompareOptions, Comparison, DiffEntry,
    Summary,
};
pub use error::{CheckError, TreeError};
