//! The post scaffolding command.
//!
//! Responsibility: merge CLI arguments over configuration into
//! `ScaffoldSettings`, wire the adapters, call the core service, and print
//! the report. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use newpost_adapters::{FixedClock, LocalFilesystem, SimpleRenderer, SystemClock};
use newpost_core::{
    application::{Clock, ScaffoldReport, ScaffoldService, ScaffoldSettings},
    domain::{SlugStyle, TemplateVariant},
};

use crate::{
    cli::{NewArgs, SlugStyleArg, Variant},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Scaffold one post.
///
/// 1. Resolve content root, variant, slug style and rollback (flags > config)
/// 2. Wire the local filesystem, built-in renderer and clock
/// 3. Plan only for `--dry-run`, otherwise scaffold
/// 4. Print the report
#[instrument(skip_all, fields(title = %args.title))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = resolve_settings(&args, &config)?;
    debug!(
        posts_dir = %settings.posts_dir.display(),
        variant = %settings.variant,
        slug_style = %settings.slug_style,
        rollback = settings.rollback,
        format = ?output.format(),
        color = output.supports_color(),
        "Settings resolved"
    );

    let clock: Box<dyn Clock> = match args.date {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };
    let service = ScaffoldService::new(
        settings,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        clock,
    );

    let report = if args.dry_run {
        let plan = service
            .plan(&args.title)
            .with_cli_context(|| "planning post")?;
        info!(path = %plan.layout.root().display(), "Dry run, nothing written");
        ScaffoldReport::from_plan(&plan)
    } else {
        service
            .scaffold(&args.title)
            .with_cli_context(|| "scaffolding post")?
    };

    output
        .report(&report, args.dry_run)
        .with_cli_context(|| "writing report")
}

/// Merge flags over configuration.
fn resolve_settings(args: &NewArgs, config: &AppConfig) -> CliResult<ScaffoldSettings> {
    let content_root = resolve_content_root(args, config)?;

    let variant = args
        .variant
        .map(convert_variant)
        .unwrap_or(config.template.variant);
    let slug_style = args
        .slug_style
        .map(convert_slug_style)
        .unwrap_or(config.template.slug_style);
    let rollback = config.rollback && !args.no_rollback;

    Ok(ScaffoldSettings::new(config.posts_dir_in(&content_root))
        .with_variant(variant)
        .with_slug_style(slug_style)
        .with_rollback(rollback))
}

fn resolve_content_root(args: &NewArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let root = match &args.content_root {
        Some(root) => root.clone(),
        None => config.content_root().map_err(CliError::config)?,
    };
    if root.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("content root {} is a file, not a directory", root.display()),
            source: None,
        });
    }
    Ok(root)
}

fn convert_variant(variant: Variant) -> TemplateVariant {
    match variant {
        Variant::Classic => TemplateVariant::Classic,
        Variant::Extended => TemplateVariant::Extended,
    }
}

fn convert_slug_style(style: SlugStyleArg) -> SlugStyle {
    match style {
        SlugStyleArg::Verbatim => SlugStyle::Verbatim,
        SlugStyleArg::Hyphenated => SlugStyle::Hyphenated,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn args(extra: &[&str]) -> NewArgs {
        let argv = ["new_post", "Hello World"].iter().chain(extra).copied();
        Cli::parse_from(argv).new
    }

    fn config_at(root: &str) -> AppConfig {
        AppConfig {
            content_root: Some(PathBuf::from(root)),
            ..AppConfig::default()
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let settings = resolve_settings(&args(&[]), &config_at("/blog/docs")).unwrap();
        assert_eq!(settings.posts_dir, PathBuf::from("/blog/docs/posts"));
        assert_eq!(settings.variant, TemplateVariant::Extended);
        assert_eq!(settings.slug_style, SlugStyle::Hyphenated);
        assert!(settings.rollback);
    }

    #[test]
    fn flags_override_config() {
        let mut config = config_at("/blog/docs");
        config.template.variant = TemplateVariant::Extended;

        let settings = resolve_settings(
            &args(&[
                "--content-root",
                "/other",
                "--variant",
                "classic",
                "--slug-style",
                "verbatim",
                "--no-rollback",
            ]),
            &config,
        )
        .unwrap();

        assert_eq!(settings.posts_dir, PathBuf::from("/other/posts"));
        assert_eq!(settings.variant, TemplateVariant::Classic);
        assert_eq!(settings.slug_style, SlugStyle::Verbatim);
        assert!(!settings.rollback);
    }

    #[test]
    fn config_can_disable_rollback() {
        let mut config = config_at("/blog/docs");
        config.rollback = false;
        let settings = resolve_settings(&args(&[]), &config).unwrap();
        assert!(!settings.rollback);
    }

    #[test]
    fn custom_posts_dir_is_joined() {
        let mut config = config_at("/blog/docs");
        config.posts_dir = PathBuf::from("articles");
        let settings = resolve_settings(&args(&[]), &config).unwrap();
        assert_eq!(settings.posts_dir, PathBuf::from("/blog/docs/articles"));
    }

    #[test]
    fn file_as_content_root_is_invalid_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let root = file.path().to_str().unwrap();

        let err = resolve_settings(&args(&["--content-root", root]), &config_at("/blog/docs"))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn value_enums_convert() {
        assert_eq!(convert_variant(Variant::Classic), TemplateVariant::Classic);
        assert_eq!(convert_variant(Variant::Extended), TemplateVariant::Extended);
        assert_eq!(convert_slug_style(SlugStyleArg::Verbatim), SlugStyle::Verbatim);
        assert_eq!(
            convert_slug_style(SlugStyleArg::Hyphenated),
            SlugStyle::Hyphenated
        );
    }
}
