//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `newpost-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{PostDate, RenderContext, TemplateVariant};
use crate::error::NewPostResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `newpost_adapters::filesystem::LocalFilesystem` (production)
/// - `newpost_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `create_dir` is deliberately non-recursive: the parent must already
/// exist, and an existing target is an error. Adapters map failures to
/// `ApplicationError::{DirectoryExists, NotFound, PermissionDenied}`, and
/// `write_file` failures to `ApplicationError::WriteError`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory.
    fn create_dir(&self, path: &Path) -> NewPostResult<()>;

    /// Create or truncate a file and write content to it.
    fn write_file(&self, path: &Path, content: &str) -> NewPostResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> NewPostResult<()>;
}

/// Port for "what day is it".
///
/// Implemented by:
/// - `newpost_adapters::clock::SystemClock` (local calendar date)
/// - `newpost_adapters::clock::FixedClock` (`--date` and tests)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> PostDate;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `newpost_adapters::renderer::SimpleRenderer` (built-in variants)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the `index.md` body for a variant.
    fn render(&self, variant: TemplateVariant, context: &RenderContext) -> NewPostResult<String>;
}
