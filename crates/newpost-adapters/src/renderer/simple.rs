//! Simple variable substitution renderer.

use newpost_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateVariant},
    error::NewPostResult,
};
use tracing::{instrument, trace};

use crate::builtin_templates;

/// Renderer over the built-in templates using `{{VAR}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, context))]
    fn render(&self, variant: TemplateVariant, context: &RenderContext) -> NewPostResult<String> {
        let rendered = context.render(builtin_templates::source(variant));
        trace!(bytes = rendered.len(), "Rendered index.md");
        Ok(rendered)
    }
}
