//! Core domain layer for new_post.
//!
//! This module contains pure logic: titles, slugs, dates, the post
//! descriptor, the planned directory layout and template substitution.
//! All I/O is handled via ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or clock access
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    post::PostDescriptor,
    post_layout::{ASSETS_DIR, DirectoryToCreate, FileToWrite, FsEntry, INDEX_FILE, PostLayout},
    template::{RenderContext, vars},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    DATE_FORMAT, PostDate, Slug, SlugStyle, TemplateVariant, Title, slugify,
};

pub use validation::DomainValidator;
