//! End-to-end comparison scenarios over real directory trees

use super::test_utils::write_files;
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;
use treecheck::report::{ReportConfig, Reporter};
use treecheck::tree::HashAlgorithm;
use treecheck::{compare_trees, Classification, CompareOptions, Comparison};

fn statuses(comparison: &Comparison) -> Vec<(PathBuf, Classification)> {
    comparison
        .entries()
        .iter()
        .map(|e| (e.relative_path.clone(), e.classification))
        .collect()
}

fn render(comparison: &Comparison) -> String {
    let mut reporter = Reporter::new(Vec::new(), &ReportConfig::default());
    reporter.write_comparison(comparison).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

/// tree1: a.txt, b.txt; tree2: a.txt, c.txt
#[test]
fn test_match_and_missing_on_each_side() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("a.txt", "hello"), ("b.txt", "x")]);
    write_files(second.path(), &[("a.txt", "hello"), ("c.txt", "x")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    assert_eq!(
        statuses(&comparison),
        vec![
            (PathBuf::from("a.txt"), Classification::Match),
            (PathBuf::from("b.txt"), Classification::MissingInSecond),
            (PathBuf::from("c.txt"), Classification::MissingInFirst),
        ]
    );
    assert_eq!(
        render(&comparison),
        "Files match: a.txt\n\
         File missing in second folder: b.txt\n\
         File missing in first folder: c.txt\n"
    );
}

#[test]
fn test_same_path_different_content_differs() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("a.txt", "hello")]);
    write_files(second.path(), &[("a.txt", "hello!")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    assert_eq!(render(&comparison), "Files differ: a.txt\n");
}

#[test]
fn test_empty_first_tree_reports_only_missing_in_first() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(second.path(), &[("d.txt", "data")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    assert_eq!(render(&comparison), "File missing in first folder: d.txt\n");
}

#[test]
fn test_nested_paths_join_across_trees() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(
        first.path(),
        &[("alice/docs/report.pdf", "v1"), ("alice/notes.md", "n"), ("bob/a.bin", "b")],
    );
    write_files(
        second.path(),
        &[("alice/docs/report.pdf", "v2"), ("alice/notes.md", "n"), ("carol/new.txt", "c")],
    );

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    assert_eq!(
        render(&comparison),
        "Files differ: alice/docs/report.pdf\n\
         Files match: alice/notes.md\n\
         File missing in second folder: bob/a.bin\n\
         File missing in first folder: carol/new.txt\n"
    );
}

#[test]
fn test_same_name_at_different_depth_is_not_joined() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("x/file.txt", "same")]);
    write_files(second.path(), &[("file.txt", "same")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    assert_eq!(
        statuses(&comparison),
        vec![
            (PathBuf::from("x").join("file.txt"), Classification::MissingInSecond),
            (PathBuf::from("file.txt"), Classification::MissingInFirst),
        ]
    );
}

#[test]
fn test_empty_files_match() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("empty", "")]);
    write_files(second.path(), &[("empty", "")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    assert!(comparison.is_in_sync());
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("z.txt", "1"), ("m/a.txt", "2"), ("b.txt", "3")]);
    write_files(second.path(), &[("z.txt", "1"), ("m/a.txt", "changed"), ("q.txt", "4")]);

    let options = CompareOptions::default();
    let run1 = compare_trees(first.path(), second.path(), &options).unwrap();
    let run2 = compare_trees(first.path(), second.path(), &options).unwrap();

    assert_eq!(run1, run2);
}

#[test]
fn test_every_path_classified_exactly_once() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("a", "1"), ("b", "2"), ("c/d", "3")]);
    write_files(second.path(), &[("b", "2"), ("c/d", "x"), ("e", "5")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();

    let paths: Vec<_> = comparison.entries().iter().map(|e| e.relative_path.clone()).collect();
    let unique: HashSet<_> = paths.iter().cloned().collect();
    assert_eq!(paths.len(), unique.len());

    let expected: HashSet<PathBuf> = ["a", "b", "e"]
        .iter()
        .map(PathBuf::from)
        .chain(std::iter::once(PathBuf::from("c").join("d")))
        .collect();
    assert_eq!(unique, expected);
}

#[test]
fn test_md5_and_blake3_agree_on_classification() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("same", "abc"), ("diff", "abc")]);
    write_files(second.path(), &[("same", "abc"), ("diff", "abd")]);

    let blake3 = compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();
    let md5_options = CompareOptions {
        hasher: treecheck::tree::FileHasher::new(HashAlgorithm::Md5).with_chunk_size(2),
        ..CompareOptions::default()
    };
    let md5 = compare_trees(first.path(), second.path(), &md5_options).unwrap();

    assert_eq!(blake3, md5);
}

#[test]
fn test_summary_line_appended_when_enabled() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("a", "1"), ("b", "2")]);
    write_files(second.path(), &[("a", "1")]);

    let comparison =
        compare_trees(first.path(), second.path(), &CompareOptions::default()).unwrap();
    let config = ReportConfig {
        summary: true,
        ..ReportConfig::default()
    };
    let mut reporter = Reporter::new(Vec::new(), &config);
    reporter.write_comparison(&comparison).unwrap();
    let output = String::from_utf8(reporter.into_inner()).unwrap();

    assert_eq!(
        output,
        "Files match: a\n\
         File missing in second folder: b\n\
         Summary: 1 match, 0 differ, 1 missing in second folder, 0 missing in first folder\n"
    );
}
