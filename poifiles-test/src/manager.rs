use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

#[async_trait]
pub trait Backend: Default {
    async fn create_temp_file(&self, prefix: &str, suffix: &str) -> io::Result<PathBuf>;
    async fn shared_dir(&self) -> io::Result<PathBuf>;
    fn cleanup_len(&self) -> usize;
}

pub struct StdManager(poifiles::std::TempFileManager);

impl Default for StdManager {
    fn default() -> Self {
        Self(poifiles::std::TempFileManager::new())
    }
}

#[async_trait]
impl Backend for StdManager {
    async fn create_temp_file(&self, prefix: &str, suffix: &str) -> io::Result<PathBuf> {
        self.0.create_temp_file(prefix, suffix)
    }

    async fn shared_dir(&self) -> io::Result<PathBuf> {
        self.0.shared_dir()
    }

    fn cleanup_len(&self) -> usize {
        self.0.cleanup().len()
    }
}

pub struct TokioManager(poifiles::tokio::TempFileManager);

impl Default for TokioManager {
    fn default() -> Self {
        Self(poifiles::tokio::TempFileManager::new())
    }
}

#[async_trait]
impl Backend for TokioManager {
    async fn create_temp_file(&self, prefix: &str, suffix: &str) -> io::Result<PathBuf> {
        self.0.create_temp_file(prefix, suffix).await
    }

    async fn shared_dir(&self) -> io::Result<PathBuf> {
        self.0.shared_dir().await
    }

    fn cleanup_len(&self) -> usize {
        self.0.cleanup().len()
    }
}
