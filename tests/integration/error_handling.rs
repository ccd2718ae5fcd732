//! Fatal error propagation: every failure aborts the comparison

use super::test_utils::{with_env, write_files};
use std::fs;
use tempfile::TempDir;
use treecheck::cli::{Commands, CompareArgs, RunContext};
use treecheck::config::CheckConfig;
use treecheck::{compare_trees, CheckError, CompareOptions, TreeError};

#[test]
fn test_missing_first_root_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("users");
    let second = temp.path().join("client_root");
    fs::create_dir(&second).unwrap();

    let err = compare_trees(&missing, &second, &CompareOptions::default()).unwrap_err();
    assert!(matches!(err, TreeError::NotFound(p) if p == missing));
}

#[test]
fn test_missing_second_root_is_not_found() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("users");
    fs::create_dir(&first).unwrap();
    let missing = temp.path().join("client_root");

    let err = compare_trees(&first, &missing, &CompareOptions::default()).unwrap_err();
    assert!(matches!(err, TreeError::NotFound(p) if p == missing));
}

#[test]
fn test_file_as_root_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_files(temp.path(), &[("plain.txt", "x")]);
    let file = temp.path().join("plain.txt");

    let err = compare_trees(&file, temp.path(), &CompareOptions::default()).unwrap_err();
    assert!(matches!(err, TreeError::NotADirectory(_)));
}

#[cfg(unix)]
#[test]
fn test_unreadable_subtree_aborts_with_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("locked/secret.txt", "s"), ("open.txt", "o")]);
    let locked = first.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users bypass directory permissions; nothing to verify then
    let bypassed = fs::read_dir(&locked).is_ok();
    let result = compare_trees(first.path(), second.path(), &CompareOptions::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if bypassed {
        return;
    }
    assert!(matches!(result, Err(TreeError::PermissionDenied(_))));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_aborts_hashing() {
    use std::os::unix::fs::PermissionsExt;

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_files(first.path(), &[("a.txt", "1")]);
    write_files(second.path(), &[("a.txt", "1")]);
    let file = first.path().join("a.txt");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o000)).unwrap();

    let bypassed = fs::File::open(&file).is_ok();
    let result = compare_trees(first.path(), second.path(), &CompareOptions::default());
    fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

    if bypassed {
        return;
    }
    assert!(matches!(result, Err(TreeError::PermissionDenied(p)) if p.ends_with("a.txt")));
}

#[test]
fn test_unset_home_without_roots_fails() {
    let context = RunContext::from_config(CheckConfig::default());

    let err = with_env(&[("SDISK_HOME", None)], || {
        context
            .execute(Some(&Commands::Compare(CompareArgs::default())), Vec::new())
            .unwrap_err()
    });

    assert!(matches!(err, CheckError::HomeNotSet(var) if var == "SDISK_HOME"));
}

#[test]
fn test_home_without_subdirectories_is_not_found() {
    let home = TempDir::new().unwrap();
    let context = RunContext::from_config(CheckConfig::default());
    let home_str = home.path().to_str().unwrap().to_string();

    let err = with_env(&[("SDISK_HOME", Some(home_str.as_str()))], || {
        context.execute(None, Vec::new()).unwrap_err()
    });

    assert!(matches!(
        err,
        CheckError::Tree(TreeError::NotFound(p)) if p == home.path().join("users")
    ));
}
