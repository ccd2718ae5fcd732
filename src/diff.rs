//! Tree comparison
//!
//! Joins two snapshots on relative path and classifies every path found in
//! either one. Paths present on both sides are compared by content digest;
//! each side's file is hashed exactly once.

use crate::error::TreeError;
use crate::tree::{FileHasher, Walker, WalkerConfig};
use crate::types::Snapshot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Outcome for one relative path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Present in both trees with identical content
    Match,
    /// Present in both trees with different content
    Differ,
    /// Present only in the first tree
    MissingInSecond,
    /// Present only in the second tree
    MissingInFirst,
}

impl Classification {
    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Match)
    }
}

/// One classified path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub relative_path: PathBuf,
    pub classification: Classification,
}

/// Per-classification counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub matched: usize,
    pub differ: usize,
    pub missing_in_second: usize,
    pub missing_in_first: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.matched + self.differ + self.missing_in_second + self.missing_in_first
    }

    pub fn mismatches(&self) -> usize {
        self.total() - self.matched
    }
}

/// Result of comparing two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    entries: Vec<DiffEntry>,
}

impl Comparison {
    /// Entries in report order: every first-tree path, then second-only paths
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for entry in &self.entries {
            match entry.classification {
                Classification::Match => summary.matched += 1,
                Classification::Differ => summary.differ += 1,
                Classification::MissingInSecond => summary.missing_in_second += 1,
                Classification::MissingInFirst => summary.missing_in_first += 1,
            }
        }
        summary
    }

    /// True when every path matched
    pub fn is_in_sync(&self) -> bool {
        self.entries.iter().all(|e| e.classification.is_match())
    }
}

/// Options for a full tree comparison
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub hasher: FileHasher,
    pub walker: WalkerConfig,
}

/// Classify every path found in either snapshot.
pub fn compare_snapshots(
    first: &Snapshot,
    second: &Snapshot,
    hasher: &FileHasher,
) -> Result<Comparison, TreeError> {
    let mut entries = Vec::with_capacity(first.len().max(second.len()));

    for (relative_path, first_path) in first {
        let classification = match second.get(relative_path) {
            Some(second_path) => {
                let first_digest = hasher.hash_file(first_path)?;
                let second_digest = hasher.hash_file(second_path)?;
                if first_digest == second_digest {
                    Classification::Match
                } else {
                    debug!(
                        path = %relative_path.display(),
                        first = %first_digest,
                        second = %second_digest,
                        "Content differs"
                    );
                    Classification::Differ
                }
            }
            None => Classification::MissingInSecond,
        };
        entries.push(DiffEntry {
            relative_path: relative_path.clone(),
            classification,
        });
    }

    entries.extend(
        second
            .keys()
            .filter(|relative_path| !first.contains_key(*relative_path))
            .map(|relative_path| DiffEntry {
                relative_path: relative_path.clone(),
                classification: Classification::MissingInFirst,
            }),
    );

    Ok(Comparison { entries })
}

/// Walk both roots and compare them.
#[instrument(skip_all, fields(first = %first.display(), second = %second.display()))]
pub fn compare_trees(
    first: &Path,
    second: &Path,
    options: &CompareOptions,
) -> Result<Comparison, TreeError> {
    let start = Instant::now();

    let first_snapshot = Walker::with_config(first, options.walker.clone()).snapshot()?;
    let second_snapshot = Walker::with_config(second, options.walker.clone()).snapshot()?;

    let comparison = compare_snapshots(&first_snapshot, &second_snapshot, &options.hasher)?;

    let summary = comparison.summary();
    info!(
        algorithm = ?options.hasher.algorithm(),
        matched = summary.matched,
        differ = summary.differ,
        missing_in_second = summary.missing_in_second,
        missing_in_first = summary.missing_in_first,
        duration_ms = start.elapsed().as_millis(),
        "Comparison completed"
    );

    Ok(comparison)
}
