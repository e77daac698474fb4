//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use goscaffold_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScaffoldResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the generator and
/// inspect the other afterwards. [`fail_on`](Self::fail_on) injects a
/// failure for a specific path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    write_order: Vec<PathBuf>,
    fail_on: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any operation on `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_on.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner.read().ok()?.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every successful write in order, repeats included.
    pub fn write_order(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.write_order.clone())
            .unwrap_or_default()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn read(&self) -> ScaffoldResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> ScaffoldResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> goscaffold_core::error::ScaffoldError {
    ApplicationError::Filesystem {
        path: PathBuf::new(),
        operation: "lock",
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

fn injected(path: &Path, operation: &'static str) -> goscaffold_core::error::ScaffoldError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        operation,
        reason: "injected failure".into(),
    }
    .into()
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        if self.read()?.fail_on.contains(path) {
            return Err(injected(path, "create directory"));
        }
        self.write()?.insert_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.write()?;
        if inner.fail_on.contains(path) {
            return Err(injected(path, "write file"));
        }

        if let Some(parent) = path.parent() {
            inner.insert_dir_all(parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.write_order.push(path.to_path_buf());
        Ok(())
    }
}
