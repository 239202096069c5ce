use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use poifiles::tokio::TempFileManager;
use poifiles::KeepFn;

fn manager_in(root: &Path) -> TempFileManager {
    TempFileManager::new().with_root(root)
}

#[tokio::test]
async fn two_calls_return_distinct_files() {
    let root = tempfile::tempdir().unwrap();
    let manager = manager_in(root.path());

    let first = manager.create_temp_file("report", ".tmp").await.unwrap();
    let second = manager.create_temp_file("report", ".tmp").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(first.parent().unwrap(), root.path().join("poifiles"));
    assert_eq!(second.parent().unwrap(), root.path().join("poifiles"));
}

#[tokio::test]
async fn joined_callers_share_one_directory() {
    let root = tempfile::tempdir().unwrap();
    let manager = Arc::new(manager_in(root.path()));

    let (a, b, c) = tokio::join!(
        manager.create_temp_file("report", ".tmp"),
        manager.create_temp_file("report", ".tmp"),
        manager.create_temp_file("data", ".dat"),
    );

    let paths = vec![a.unwrap(), b.unwrap(), c.unwrap()];
    let distinct: HashSet<_> = paths.iter().collect();
    assert_eq!(distinct.len(), 3);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
    assert_eq!(manager.shared_dir().await.unwrap(), root.path().join("poifiles"));
}

#[tokio::test]
async fn empty_suffix_uses_default() {
    let root = tempfile::tempdir().unwrap();
    let path = manager_in(root.path())
        .create_temp_file("report", "")
        .await
        .unwrap();

    assert_eq!(path.extension().unwrap(), "tmp");
}

#[tokio::test]
async fn keep_override_skips_registration() {
    let root = tempfile::tempdir().unwrap();
    let manager = manager_in(root.path()).with_keep_files(KeepFn(|| true));

    let path = manager.create_temp_file("report", ".tmp").await.unwrap();

    assert!(path.exists());
    assert!(manager.cleanup().is_empty());
}

#[tokio::test]
async fn cleanup_registration_matches_sync_flavor() {
    let root = tempfile::tempdir().unwrap();
    let manager = manager_in(root.path()).with_keep_files(KeepFn(|| false));

    let path = manager.create_temp_file("report", ".tmp").await.unwrap();

    assert_eq!(manager.cleanup().len(), 2);
    assert!(manager.cleanup().is_registered(&path));

    manager.cleanup().run();
    assert!(!path.exists());
}
