//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use newpost_core::{
    application::{ApplicationError, ports::Filesystem},
    error::NewPostResult,
};

/// In-memory filesystem for testing.
///
/// Mirrors the local adapter's semantics: `create_dir` needs an existing
/// parent and fails on an existing path, and paths registered with
/// [`MemoryFilesystem::deny`] fail with `PermissionDenied` (directories) or
/// `WriteError` (files).
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a directory and all its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in path.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        self
    }

    /// Make every later operation on `path` fail.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Direct children (files and directories) of `dir`.
    pub fn children(&self, dir: &Path) -> Vec<PathBuf> {
        let Ok(inner) = self.read() else {
            return Vec::new();
        };
        let mut out: Vec<PathBuf> = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();
        out.sort();
        out
    }

    fn read(&self) -> NewPostResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> NewPostResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> NewPostResult<()> {
        let mut inner = self.write()?;

        if inner.denied.contains(path) {
            return Err(ApplicationError::PermissionDenied {
                path: path.to_path_buf(),
            }
            .into());
        }
        if inner.exists(path) {
            return Err(ApplicationError::DirectoryExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::NotFound {
                path: path.parent().unwrap_or(path).to_path_buf(),
            }
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> NewPostResult<()> {
        let mut inner = self.write()?;

        if inner.denied.contains(path) {
            return Err(ApplicationError::WriteError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::WriteError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().map(|inner| inner.exists(path)).unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> NewPostResult<()> {
        let mut inner = self.write()?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}
