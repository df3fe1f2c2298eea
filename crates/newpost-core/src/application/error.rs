//! Application layer errors.
//!
//! These errors represent failures while carrying out a scaffold, mostly
//! filesystem failures. Invalid input is a `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The post directory is already there (same title, same day).
    #[error("Directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    /// A parent directory is missing.
    #[error("No such directory: {path}")]
    NotFound { path: PathBuf },

    /// The OS refused access.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Creating or writing a file failed after its directory existed.
    #[error("Failed to write {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    /// Any other filesystem failure.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("A post already exists at {}", path.display()),
                "Choose a different title".into(),
                "Or pass --date to file it under another day".into(),
            ],
            Self::NotFound { path } => vec![
                format!("Missing directory: {}", path.display()),
                "Check the content root (--content-root or NEW_POST_CONTENT_ROOT)".into(),
                "The posts directory must exist before posts can be added".into(),
            ],
            Self::PermissionDenied { path } => vec![
                format!("Cannot access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::WriteError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check available disk space".into(),
                "Check file permissions".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::PermissionDenied { .. }
            | Self::WriteError { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
