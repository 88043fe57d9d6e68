//! In-memory filesystem adapter.
//!
//! Holds files in a map and remembers every write, so tests can assert on
//! both the final contents and on which files a run actually touched.
//! Clones share state, so a test can keep a handle after moving one into a
//! [`ServiceContext`](crate::context::ServiceContext).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::filesystem::FileSystem;

/// Filesystem adapter that never touches disk.
#[derive(Default, Clone)]
pub struct MemoryFileSystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    writes: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file without counting it as a write.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files().insert(path.into(), contents.into());
        self
    }

    /// Returns the current contents of `path`, if present.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files().get(path).cloned()
    }

    /// Paths written since creation, in write order.
    #[must_use]
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn files(&self) -> MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.contents(path).ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.files().insert(path.to_path_buf(), contents.to_string());
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files();
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path))
    }
}
