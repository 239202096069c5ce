use tempfile::TempDir;

pub fn temp_root() -> TempDir {
    tempfile::tempdir().expect("Cannot create a temporary directory")
}
