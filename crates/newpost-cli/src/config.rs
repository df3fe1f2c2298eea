//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resulting
//! [`ScaffoldSettings`](newpost_core::application::ScaffoldSettings).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command, not here)
//! 2. `NEW_POST_*` environment variables, `__` between nested keys
//! 3. Config file: `--config FILE`, else the per-user `config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use newpost_core::domain::{SlugStyle, TemplateVariant};
use serde::{Deserialize, Serialize};

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "NEW_POST";

/// Name of the directory looked up next to the executable.
pub const DEFAULT_CONTENT_DIR: &str = "docs";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the posts directory. `None` means `<exe dir>/docs`.
    pub content_root: Option<PathBuf>,
    /// Posts directory, relative to the content root.
    pub posts_dir: PathBuf,
    /// Remove a half-created post directory when a later step fails.
    pub rollback: bool,
    pub template: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub variant: TemplateVariant,
    pub slug_style: SlugStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_root: None,
            posts_dir: PathBuf::from("posts"),
            rollback: true,
            template: TemplateConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the per-user file is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration sources")?;

        let cfg: Self = settings
            .try_deserialize()
            .context("invalid configuration value")?;

        tracing::debug!(?cfg, "Configuration loaded");
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.new_post.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "newpost", "new_post")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".new_post.toml"))
    }

    /// Content root to use when no `--content-root` flag was given.
    pub fn content_root(&self) -> anyhow::Result<PathBuf> {
        match &self.content_root {
            Some(root) => Ok(root.clone()),
            None => default_content_root(),
        }
    }

    /// Posts directory under `content_root`.
    pub fn posts_dir_in(&self, content_root: &Path) -> PathBuf {
        content_root.join(&self.posts_dir)
    }
}

/// `<directory of the running executable>/docs`, symlinks resolved.
pub fn default_content_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", exe.display()))?;
    let dir = exe
        .parent()
        .with_context(|| format!("{} has no parent directory", exe.display()))?;
    Ok(dir.join(DEFAULT_CONTENT_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(body: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new_post.toml");
        fs::write(&path, body).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_extended_hyphenated() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.template.variant, TemplateVariant::Extended);
        assert_eq!(cfg.template.slug_style, SlugStyle::Hyphenated);
        assert_eq!(cfg.posts_dir, PathBuf::from("posts"));
        assert!(cfg.rollback);
        assert!(cfg.content_root.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_reads_explicit_file() {
        let (_dir, path) = write_config(
            r#"
content_root = "/srv/blog/docs"
posts_dir = "articles"
rollback = false

[template]
variant = "classic"
slug_style = "verbatim"

[output]
no_color = true
"#,
        );

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.content_root, Some(PathBuf::from("/srv/blog/docs")));
        assert_eq!(cfg.posts_dir, PathBuf::from("articles"));
        assert!(!cfg.rollback);
        assert_eq!(cfg.template.variant, TemplateVariant::Classic);
        assert_eq!(cfg.template.slug_style, SlugStyle::Verbatim);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("[template]\nvariant = \"classic\"\n");

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.template.variant, TemplateVariant::Classic);
        assert_eq!(cfg.template.slug_style, SlugStyle::Hyphenated);
        assert!(cfg.rollback);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let (_dir, path) = write_config("[template]\nvariant = \"fancy\"\n");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown template variant 'fancy'"));
    }

    #[test]
    fn unknown_slug_style_is_an_error() {
        let (_dir, path) = write_config("[template]\nslug_style = \"camel\"\n");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown slug style 'camel'"));
    }

    #[test]
    fn short_spellings_are_accepted_in_files() {
        let (_dir, path) = write_config("[template]\nvariant = \"a\"\nslug_style = \"raw\"\n");
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.template.variant, TemplateVariant::Classic);
        assert_eq!(cfg.template.slug_style, SlugStyle::Verbatim);
    }

    #[test]
    fn configured_content_root_wins() {
        let cfg = AppConfig {
            content_root: Some(PathBuf::from("/blog/docs")),
            ..AppConfig::default()
        };
        let root = cfg.content_root().unwrap();
        assert_eq!(root, PathBuf::from("/blog/docs"));
        assert_eq!(cfg.posts_dir_in(&root), PathBuf::from("/blog/docs/posts"));
    }

    #[test]
    fn default_content_root_sits_next_to_the_executable() {
        let root = default_content_root().unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with(DEFAULT_CONTENT_DIR));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
