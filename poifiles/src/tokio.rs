use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cleanup::CleanupList;
use crate::config::{EnvKeepFiles, KeepFiles};

/// Async flavor of [`crate::std::TempFileManager`].
pub struct TempFileManager {
    root: PathBuf,
    dir: tokio::sync::Mutex<Option<PathBuf>>,
    keep: Box<dyn KeepFiles>,
    cleanup: Arc<CleanupList>,
}

impl TempFileManager {
    pub fn new() -> Self {
        Self {
            root: env::temp_dir(),
            dir: tokio::sync::Mutex::new(None),
            keep: Box::new(EnvKeepFiles),
            cleanup: Arc::new(CleanupList::new()),
        }
    }

    crate::impl_manager_config!();

    pub async fn shared_dir(&self) -> io::Result<PathBuf> {
        let mut dir = self.dir.lock().await;
        if let Some(path) = dir.as_ref() {
            return Ok(path.clone());
        }

        let path = self.root.join(crate::TEMP_DIR_NAME);
        tokio::fs::create_dir_all(&path).await?;
        if !self.keep.keep_files() {
            self.cleanup.register_dir(&path);
        }
        tracing::debug!(dir = %path.display(), "created shared temp directory");

        *dir = Some(path.clone());

        Ok(path)
    }

    /// See [`crate::std::TempFileManager::create_temp_file`]. The unique
    /// creation itself is synchronous and runs on the blocking pool.
    pub async fn create_temp_file(&self, prefix: &str, suffix: &str) -> io::Result<PathBuf> {
        let dir = self.shared_dir().await?;

        let prefix = prefix.to_owned();
        let suffix = suffix.to_owned();
        let path = tokio::task::spawn_blocking(move || {
            crate::std::create_unique_in(&dir, &prefix, &suffix)
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))??;

        if !self.keep.keep_files() {
            self.cleanup.register_file(&path);
        }
        tracing::trace!(path = %path.display(), "created temp file");

        Ok(path)
    }
}
