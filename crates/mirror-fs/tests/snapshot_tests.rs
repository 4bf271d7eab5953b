//! Tests for flat directory snapshots

use assert_fs::TempDir;
use assert_fs::prelude::*;
use mirror_fs::{DirectorySnapshot, Error};
use pretty_assertions::assert_eq;
use std::ffi::OsString;

#[test]
fn snapshot_lists_direct_children_only() {
    let dir = TempDir::new().unwrap();
    dir.child("a.txt").write_str("a").unwrap();
    dir.child("b.txt").write_str("b").unwrap();
    dir.child("nested/deep.txt").write_str("deep").unwrap();

    let snapshot = DirectorySnapshot::take(dir.path()).unwrap();
    let names: Vec<OsString> = snapshot.iter().cloned().collect();

    assert_eq!(
        names,
        vec![
            OsString::from("a.txt"),
            OsString::from("b.txt"),
            OsString::from("nested"),
        ]
    );
}

#[test]
fn empty_directory_gives_empty_snapshot() {
    let dir = TempDir::new().unwrap();

    let snapshot = DirectorySnapshot::take(dir.path()).unwrap();

    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
    assert_eq!(snapshot.root(), dir.path());
}

#[test]
fn missing_directory_is_an_error_not_empty() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    let result = DirectorySnapshot::take(&missing);

    match result {
        Err(Error::DirectoryAccess { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected DirectoryAccess error, got {other:?}"),
    }
}

#[test]
fn snapshot_is_not_cached() {
    let dir = TempDir::new().unwrap();
    dir.child("first").write_str("1").unwrap();

    let before = DirectorySnapshot::take(dir.path()).unwrap();
    dir.child("second").write_str("2").unwrap();
    let after = DirectorySnapshot::take(dir.path()).unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert!(after.contains("second".as_ref()));
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_preserved() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    let name = OsStr::from_bytes(b"caf\xe9.txt");
    std::fs::write(dir.path().join(name), "x").unwrap();

    let snapshot = DirectorySnapshot::take(dir.path()).unwrap();
    assert!(snapshot.contains(name));
}
