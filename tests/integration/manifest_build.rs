//! Integration tests for manifest construction

use std::fs;
use tempfile::TempDir;
use treesum::error::ManifestError;
use treesum::manifest::builder::ManifestBuilder;
use treesum::skip::SkipSet;

const HI_SHA256: &str = "8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4";
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Test that a directory manifest records every file with size and digest
#[test]
fn test_directory_manifest_records_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("a.txt"), "hi").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("b.txt"), "abc").unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    assert!(manifest.is_directory);
    assert_eq!(manifest.entries.len(), 2);

    assert_eq!(manifest.entries[0].relative_path, "a.txt");
    assert_eq!(manifest.entries[0].size_bytes, 2);
    assert_eq!(manifest.entries[0].digest, HI_SHA256);

    assert_eq!(manifest.entries[1].relative_path, "sub/b.txt");
    assert_eq!(manifest.entries[1].size_bytes, 3);
    assert_eq!(manifest.entries[1].digest, ABC_SHA256);
}

/// Test that directories themselves never appear as entries
#[test]
fn test_directories_are_not_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("empty_dir")).unwrap();
    fs::create_dir(root.join("full_dir")).unwrap();
    fs::write(root.join("full_dir").join("f.txt"), "").unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    assert_eq!(manifest.entries.len(), 1);
    assert_eq!(manifest.entries[0].relative_path, "full_dir/f.txt");
    assert_eq!(manifest.entries[0].size_bytes, 0);
    assert_eq!(manifest.entries[0].digest, EMPTY_SHA256);
}

/// Test that a single-file root produces a file manifest keyed by base name
#[test]
fn test_single_file_root_uses_base_name() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("nested")).unwrap();
    let file_path = temp_dir.path().join("nested").join("solo.bin");
    fs::write(&file_path, "hi").unwrap();

    let manifest = ManifestBuilder::new(file_path).build().unwrap();

    assert!(!manifest.is_directory);
    assert_eq!(manifest.entries.len(), 1);
    assert_eq!(manifest.entries[0].relative_path, "solo.bin");
    assert_eq!(manifest.entries[0].size_bytes, 2);
    assert_eq!(manifest.entries[0].digest, HI_SHA256);
}

/// Test that entries come out in depth-first, lexicographic order
#[test]
fn test_entries_follow_depth_first_lexicographic_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    // Create in non-alphabetical order
    fs::write(root.join("z.txt"), "z").unwrap();
    fs::create_dir(root.join("b")).unwrap();
    fs::write(root.join("b").join("inner.txt"), "i").unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    let paths: Vec<_> = manifest
        .entries
        .iter()
        .map(|e| e.relative_path.as_str())
        .collect();
    assert_eq!(paths, vec!["a.txt", "b/inner.txt", "z.txt"]);
}

/// Test that skip names prune whole subtrees wherever they appear
#[test]
fn test_skip_set_prunes_named_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("keep.txt"), "k").unwrap();
    fs::create_dir(root.join("cache")).unwrap();
    fs::write(root.join("cache").join("junk.txt"), "j").unwrap();
    fs::create_dir_all(root.join("sub").join("cache").join("deeper")).unwrap();
    fs::write(
        root.join("sub").join("cache").join("deeper").join("x.txt"),
        "x",
    )
    .unwrap();
    fs::write(root.join("sub").join("real.txt"), "r").unwrap();

    let skip = SkipSet::from_names(["cache"]);
    let manifest = ManifestBuilder::new(root).with_skip_set(skip).build().unwrap();

    let paths: Vec<_> = manifest
        .entries
        .iter()
        .map(|e| e.relative_path.as_str())
        .collect();
    assert_eq!(paths, vec!["keep.txt", "sub/real.txt"]);
}

/// Test a pruned sibling leaving exactly one known entry behind
#[test]
fn test_skip_scenario_leaves_single_known_entry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("a.txt"), "hi").unwrap();
    fs::create_dir(root.join("skipme")).unwrap();
    fs::write(root.join("skipme").join("b.txt"), "ignored").unwrap();

    let skip = SkipSet::from_names(["skipme"]);
    let manifest = ManifestBuilder::new(root).with_skip_set(skip).build().unwrap();

    assert_eq!(manifest.entries.len(), 1);
    assert_eq!(manifest.entries[0].relative_path, "a.txt");
    assert_eq!(manifest.entries[0].size_bytes, 2);
    assert_eq!(manifest.entries[0].digest, HI_SHA256);
}

/// Test that a file whose name matches a skip name is still recorded
#[test]
fn test_skip_names_only_apply_to_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("cache"), "not a directory").unwrap();

    let skip = SkipSet::from_names(["cache"]);
    let manifest = ManifestBuilder::new(root).with_skip_set(skip).build().unwrap();

    assert_eq!(manifest.entries.len(), 1);
    assert_eq!(manifest.entries[0].relative_path, "cache");
}

/// Test that a root directory matching a skip name yields an empty manifest
#[test]
fn test_skip_named_root_yields_empty_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("cache");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("inner.txt"), "i").unwrap();

    let skip = SkipSet::from_names(["cache"]);
    let manifest = ManifestBuilder::new(root).with_skip_set(skip).build().unwrap();

    assert!(manifest.is_directory);
    assert!(manifest.entries.is_empty());
}

/// Test that a missing root fails up front with a path access error
#[test]
fn test_missing_root_fails_with_path_access() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("does-not-exist");

    let err = ManifestBuilder::new(root.clone()).build().unwrap_err();

    match err {
        ManifestError::PathAccess { path, .. } => assert_eq!(path, root),
        other => panic!("expected PathAccess, got {:?}", other),
    }
}

/// Test that an unreadable subdirectory aborts the build with a traversal
/// error carrying the offending path, returning no partial manifest
#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_fails_with_traversal() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("ok.txt"), "hi").unwrap();
    let locked = root.join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret.txt"), "abc").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can list the directory regardless of its mode, so
    // there is nothing to exercise in that environment.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = ManifestBuilder::new(root).build();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(ManifestError::Traversal { path, .. }) => assert!(path.ends_with("locked")),
        other => panic!("expected Traversal, got {:?}", other),
    }
}

/// Test that two names rendering to the same relative path abort the build
#[cfg(unix)]
#[test]
fn test_colliding_lossy_names_fail_with_duplicate_entry() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    // Distinct byte names, both rendered as "a\u{FFFD}.txt".
    fs::write(root.join(OsStr::from_bytes(b"a\xC0.txt")), "one").unwrap();
    fs::write(root.join(OsStr::from_bytes(b"a\xC1.txt")), "two").unwrap();

    let err = ManifestBuilder::new(root).build().unwrap_err();

    match err {
        ManifestError::DuplicateEntry { path } => assert_eq!(path, "a\u{FFFD}.txt"),
        other => panic!("expected DuplicateEntry, got {:?}", other),
    }
}

/// Test that nested entries always use forward-slash separators
#[test]
fn test_relative_paths_use_forward_slashes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir_all(root.join("a").join("b")).unwrap();
    fs::write(root.join("a").join("b").join("c.txt"), "c").unwrap();

    let manifest = ManifestBuilder::new(root).build().unwrap();

    assert_eq!(manifest.entries[0].relative_path, "a/b/c.txt");
    assert!(!manifest.entries[0].relative_path.contains('\\'));
}
