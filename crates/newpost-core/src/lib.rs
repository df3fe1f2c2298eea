//! new_post Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `new_post`
//! blog scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          newpost-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Clock, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    newpost-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemClock, etc)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Title, Slug, PostDate, PostLayout)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use newpost_core::application::{ScaffoldService, ScaffoldSettings};
//!
//! let service = ScaffoldService::new(
//!     ScaffoldSettings::new("docs/posts"),
//!     renderer,   // impl TemplateRenderer
//!     filesystem, // impl Filesystem
//!     clock,      // impl Clock
//! );
//! let report = service.scaffold("Hello World")?;
//! assert!(report.path.ends_with("hello-world"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, PostPlan, ScaffoldReport, ScaffoldService, ScaffoldSettings,
        ports::{Clock, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        PostDate, PostDescriptor, PostLayout, RenderContext, Slug, SlugStyle, TemplateVariant,
        Title,
    };
    pub use crate::error::{NewPostError, NewPostResult};
}
