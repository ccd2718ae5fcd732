//! Property-based tests for classification completeness and correctness

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use treecheck::{compare_trees, Classification, CompareOptions};

/// Per-path content on each side; `None` means the file is absent there
type Layout = BTreeMap<String, (Option<String>, Option<String>)>;

fn layout_strategy() -> impl Strategy<Value = Layout> {
    proptest::collection::btree_map(
        "(dir_[a-c]/)?[a-z]{1,6}",
        (
            proptest::option::of("[ab]{0,3}"),
            proptest::option::of("[ab]{0,3}"),
        ),
        0..12,
    )
}

fn write(root: &Path, name: &str, content: &str) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn expected(first: &Option<String>, second: &Option<String>) -> Option<Classification> {
    match (first, second) {
        (Some(a), Some(b)) if a == b => Some(Classification::Match),
        (Some(_), Some(_)) => Some(Classification::Differ),
        (Some(_), None) => Some(Classification::MissingInSecond),
        (None, Some(_)) => Some(Classification::MissingInFirst),
        (None, None) => None,
    }
}

/// Every path in either tree is classified exactly once, and correctly
#[test]
fn test_classification_matches_layout() {
    let mut runner = proptest::test_runner::TestRunner::new(proptest::test_runner::Config {
        cases: 48,
        ..proptest::test_runner::Config::default()
    });

    runner
        .run(&layout_strategy(), |layout| {
            let first = TempDir::new().unwrap();
            let second = TempDir::new().unwrap();
            for (name, (a, b)) in &layout {
                if let Some(a) = a {
                    write(first.path(), name, a);
                }
                if let Some(b) = b {
                    write(second.path(), name, b);
                }
            }

            let comparison =
                compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

            let seen: Vec<PathBuf> = comparison
                .entries()
                .iter()
                .map(|e| e.relative_path.clone())
                .collect();
            let unique: HashSet<&PathBuf> = seen.iter().collect();
            prop_assert_eq!(seen.len(), unique.len());

            let mut expected_count = 0;
            for (name, (a, b)) in &layout {
                let want = expected(a, b);
                let got = comparison
                    .entries()
                    .iter()
                    .find(|e| e.relative_path == PathBuf::from(name))
                    .map(|e| e.classification);
                prop_assert_eq!(got, want, "path {}", name);
                if want.is_some() {
                    expected_count += 1;
                }
            }
            prop_assert_eq!(seen.len(), expected_count);

            // First-tree paths come before second-only paths
            let first_missing = comparison
                .entries()
                .iter()
                .position(|e| e.classification == Classification::MissingInFirst)
                .unwrap_or(seen.len());
            prop_assert!(comparison.entries()[first_missing..]
                .iter()
                .all(|e| e.classification == Classification::MissingInFirst));

            Ok(())
        })
        .unwrap();
}
