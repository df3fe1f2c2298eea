//! `index.md` templates that ship with the binary.
//!
//! Placeholders use the `{{NAME}}` syntax understood by
//! [`RenderContext::render`](newpost_core::domain::RenderContext::render).
//! Everything else is copied byte-for-byte, trailing blank lines included.

use newpost_core::domain::TemplateVariant;

/// Front matter, `.jpg` hero image, intro snippet, one header.
pub const CLASSIC: &str = r#"---
title: {{TITLE}}
date: {{DATE}}
---

![hero image](./assets/hero.jpg)

intro snippet

<!-- more -->

## Header 1


"#;

/// Classic plus snippet includes, a figure block and `.webp` assets.
pub const EXTENDED: &str = r#"---
title: {{TITLE}}
date: {{DATE}}
---

![hero image](./assets/hero.webp)

intro snippet

--8<-- "ee.md"

<!-- more -->

## Header 1

<figure markdown="span">
 ![template figure](./assets/image.webp)
 <figcaption>template figure</figcaption>
</figure>


--8<-- "blog-feedback.md"

"#;

/// Template source for a variant.
pub const fn source(variant: TemplateVariant) -> &'static str {
    match variant {
        TemplateVariant::Classic => CLASSIC,
        TemplateVariant::Extended => EXTENDED,
    }
}
