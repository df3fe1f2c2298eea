//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use newpost_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{NewPostError, NewPostResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> NewPostResult<()> {
        trace!(path = %path.display(), "mkdir");
        std::fs::create_dir(path).map_err(|e| map_create_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> NewPostResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| {
            ApplicationError::WriteError {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling symlink still counts as "taken"
        path.symlink_metadata().is_ok()
    }

    fn remove_dir_all(&self, path: &Path) -> NewPostResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to remove directory: {}", e),
            }
            .into()
        })
    }
}

fn map_create_error(path: &Path, e: io::Error) -> NewPostError {
    let error = match e.kind() {
        io::ErrorKind::AlreadyExists => ApplicationError::DirectoryExists {
            path: path.to_path_buf(),
        },
        // create_dir only reports NotFound for a missing parent
        io::ErrorKind::NotFound => ApplicationError::NotFound {
            path: path.parent().unwrap_or(path).to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => ApplicationError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to create directory: {}", e),
        },
    };
    error.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("posts").join("2024-01-01-x");

        let err = fs.create_dir(&nested).unwrap_err();
        assert_eq!(
            err,
            NewPostError::Application(ApplicationError::NotFound {
                path: tmp.path().join("posts")
            })
        );
        assert!(!tmp.path().join("posts").exists());
    }

    #[test]
    fn create_dir_reports_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("post");

        fs.create_dir(&dir).unwrap();
        assert!(fs.exists(&dir));
        assert!(matches!(
            fs.create_dir(&dir),
            Err(NewPostError::Application(ApplicationError::DirectoryExists { .. }))
        ));
    }

    #[test]
    fn write_then_remove() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("post");
        fs.create_dir(&dir).unwrap();

        let file = dir.join("index.md");
        fs.write_file(&file, "---\ntitle: x\n---\n").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "---\ntitle: x\n---\n");

        fs.remove_dir_all(&dir).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[test]
    fn write_into_missing_directory_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("missing").join("index.md");

        assert!(matches!(
            fs.write_file(&file, "x"),
            Err(NewPostError::Application(ApplicationError::WriteError { .. }))
        ));
    }

    #[test]
    fn remove_missing_directory_is_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            LocalFilesystem::new().remove_dir_all(&tmp.path().join("nope")),
            Err(NewPostError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }
}
