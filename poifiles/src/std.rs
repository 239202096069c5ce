use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::cleanup::CleanupList;
use crate::config::{EnvKeepFiles, KeepFiles};

/// Creates temporary files collected into one shared directory.
///
/// The directory is `<root>/poifiles`, resolved on first use and stable
/// for the lifetime of the manager. Created files and the directory are
/// registered with the manager's [`CleanupList`] unless the keep-files
/// provider says otherwise.
pub struct TempFileManager {
    root: PathBuf,
    dir: Mutex<Option<PathBuf>>,
    keep: Box<dyn KeepFiles>,
    cleanup: Arc<CleanupList>,
}

impl TempFileManager {
    pub fn new() -> Self {
        Self {
            root: env::temp_dir(),
            dir: Mutex::new(None),
            keep: Box::new(EnvKeepFiles),
            cleanup: Arc::new(CleanupList::new()),
        }
    }

    crate::impl_manager_config!();

    /// Resolves the shared directory, creating it on first call.
    ///
    /// A directory left behind by an earlier process is reused as is.
    pub fn shared_dir(&self) -> io::Result<PathBuf> {
        let mut dir = self.dir.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = dir.as_ref() {
            return Ok(path.clone());
        }

        let path = self.root.join(crate::TEMP_DIR_NAME);
        fs::create_dir_all(&path)?;
        if !self.keep.keep_files() {
            self.cleanup.register_dir(&path);
        }
        tracing::debug!(dir = %path.display(), "created shared temp directory");

        *dir = Some(path.clone());

        Ok(path)
    }

    /// Creates a new, empty, uniquely named file in the shared directory
    /// and returns its path.
    ///
    /// The file is registered for removal by [`CleanupList::run`] unless
    /// the keep-files provider is set. An empty `suffix` selects
    /// [`crate::DEFAULT_SUFFIX`].
    pub fn create_temp_file(&self, prefix: &str, suffix: &str) -> io::Result<PathBuf> {
        let dir = self.shared_dir()?;
        let path = create_unique_in(&dir, prefix, suffix)?;

        if !self.keep.keep_files() {
            self.cleanup.register_file(&path);
        }
        tracing::trace!(path = %path.display(), "created temp file");

        Ok(path)
    }
}

pub(crate) fn create_unique_in(dir: &Path, prefix: &str, suffix: &str) -> io::Result<PathBuf> {
    if prefix.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "temp file prefix must not be empty",
        ));
    }

    let suffix = if suffix.is_empty() {
        crate::DEFAULT_SUFFIX
    } else {
        suffix
    };

    let file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(suffix)
        .tempfile_in(dir)?;

    file.into_temp_path().keep().map_err(|e| e.error)
}
