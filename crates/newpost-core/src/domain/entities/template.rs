//! Post template model and variable substitution.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  TemplateVariant (classic | extended)         │
//! │        │  looked up by a TemplateRenderer     │
//! │        ▼                                      │
//! │  template source with {{TITLE}} / {{DATE}}    │
//! │        │  RenderContext::render               │
//! │        ▼                                      │
//! │  index.md content                             │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Substitution is a single left-to-right pass. Substituted values are never
//! rescanned, so a title that itself contains `{{DATE}}` is written verbatim.

use std::collections::HashMap;

use crate::domain::entities::post::PostDescriptor;

/// Variables every post template may reference.
pub mod vars {
    pub const TITLE: &str = "TITLE";
    pub const DATE: &str = "DATE";
    pub const SLUG: &str = "SLUG";
    pub const DIRECTORY: &str = "DIRECTORY";
}

/// Context for template rendering.
///
/// A **Value Object** holding the values substituted into a post template.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `TITLE` | "Hello World" | User input |
/// | `DATE` | "2024-01-01" | Clock / `--date` |
/// | `SLUG` | "hello-world" | Computed |
/// | `DIRECTORY` | "2024-01-01-hello-world" | Computed |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the context for a post.
    pub fn for_post(post: &PostDescriptor) -> Self {
        let mut variables = HashMap::new();
        variables.insert(vars::TITLE.to_string(), post.title().to_string());
        variables.insert(vars::DATE.to_string(), post.date().to_string());
        variables.insert(vars::SLUG.to_string(), post.slug().to_string());
        variables.insert(vars::DIRECTORY.to_string(), post.directory_name());

        Self { variables }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{TITLE}}{{TITLE}}` → both replaced
    /// - an unterminated `{{` is copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = &after_open[..end];
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
