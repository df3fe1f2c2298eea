// ============================================================================
// domain/error.rs - POST DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be carried inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Post title cannot be empty")]
    EmptyTitle,

    #[error("Invalid post title '{title}': {reason}")]
    InvalidTitle { title: String, reason: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Unknown template variant '{0}'")]
    UnknownVariant(String),

    #[error("Unknown slug style '{0}'")]
    UnknownSlugStyle(String),

    // ========================================================================
    // Layout Invariants
    // ========================================================================
    #[error("Post layout is empty")]
    EmptyLayout,

    #[error("Duplicate path in post layout: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyTitle => vec![
                "Pass the post title as the first argument".into(),
                "Example: new_post \"My First Post\"".into(),
            ],
            Self::InvalidTitle { title, reason } => vec![
                format!("'{}' cannot be used as a post title: {}", title, reason),
                "Titles become a single directory name, so avoid '/' and '\\'".into(),
            ],
            Self::InvalidDate { .. } => vec![
                "Dates use the ISO format YYYY-MM-DD".into(),
                "Example: --date 2024-01-01".into(),
            ],
            Self::UnknownVariant(_) => vec![
                "Known template variants:".into(),
                "  • classic   - front matter, hero image, header".into(),
                "  • extended  - adds snippet includes and a figure block".into(),
            ],
            Self::UnknownSlugStyle(_) => vec![
                "Known slug styles:".into(),
                "  • verbatim    - use the title unchanged".into(),
                "  • hyphenated  - lowercase, spaces and underscores become '-'".into(),
            ],
            _ => vec!["This is a bug in the post template, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyTitle
            | Self::InvalidTitle { .. }
            | Self::InvalidDate { .. }
            | Self::UnknownVariant(_)
            | Self::UnknownSlugStyle(_) => ErrorCategory::Validation,
            Self::EmptyLayout | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
