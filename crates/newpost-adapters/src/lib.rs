//! Infrastructure adapters for new_post.
//!
//! This crate implements the ports defined in `newpost-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod clock;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
