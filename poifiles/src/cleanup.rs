use std::fs;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    File(PathBuf),
    Dir(PathBuf),
}

impl Entry {
    fn path(&self) -> &Path {
        match self {
            Entry::File(path) => path,
            Entry::Dir(path) => path,
        }
    }
}

/// Paths scheduled for best-effort removal.
///
/// The list does nothing on its own. The application's shutdown path calls
/// [`run`](CleanupList::run) once; on abnormal termination cleanup is
/// skipped entirely. Files are removed before directories, and directories
/// are removed non-recursively, so a directory still holding kept files
/// survives.
pub struct CleanupList {
    entries: Mutex<Vec<Entry>>,
}

impl CleanupList {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn register_file(&self, path: &Path) {
        self.lock().push(Entry::File(path.to_path_buf()));
    }

    pub(crate) fn register_dir(&self, path: &Path) {
        self.lock().push(Entry::Dir(path.to_path_buf()));
    }

    pub fn is_registered(&self, path: &Path) -> bool {
        self.lock().iter().any(|entry| entry.path() == path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the registered paths, in registration order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock()
            .iter()
            .map(|entry| entry.path().to_path_buf())
            .collect()
    }

    /// Removes everything registered so far. Failures are logged and
    /// otherwise ignored; a second call is a no-op.
    pub fn run(&self) {
        let entries = {
            let mut lock = self.lock();
            mem::take(&mut *lock)
        };

        for entry in entries.iter() {
            if let Entry::File(path) = entry {
                if let Err(e) = fs::remove_file(path) {
                    tracing::debug!(path = %path.display(), error = %e, "could not remove temp file");
                }
            }
        }

        for entry in entries.iter() {
            if let Entry::Dir(path) = entry {
                if let Err(e) = fs::remove_dir(path) {
                    tracing::debug!(path = %path.display(), error = %e, "could not remove temp directory");
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
