pub mod common;
pub mod post;
pub mod post_layout;
pub mod template;

pub use crate::domain::DomainError;
pub use post::PostDescriptor;
pub use post_layout::PostLayout;
pub use template::RenderContext;
