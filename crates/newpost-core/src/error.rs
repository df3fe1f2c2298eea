//! Unified error handling for new_post core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NewPostError {
    /// Errors from the domain layer (invalid title, date, layout).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl NewPostError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the post directory was already present.
    pub fn is_directory_exists(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::DirectoryExists { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type NewPostResult<T> = Result<T, NewPostError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn directory_exists_is_a_validation_error() {
        let err: NewPostError = ApplicationError::DirectoryExists {
            path: PathBuf::from("posts/x"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_directory_exists());
        assert!(err.to_string().contains("posts/x"));
    }

    #[test]
    fn not_found_keeps_its_category() {
        let err: NewPostError = ApplicationError::NotFound {
            path: PathBuf::from("docs/posts"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("content root")));
    }

    #[test]
    fn domain_errors_display_transparently() {
        let err: NewPostError = DomainError::EmptyTitle.into();
        assert_eq!(err.to_string(), "Post title cannot be empty");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
