//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use newpost_core::domain::PostDate;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "new_post",
    bin_name = "new_post",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a dated blog post directory",
    long_about = "Creates <content-root>/posts/<YYYY-MM-DD>-<slug>/ with an empty \
                  assets/ directory and an index.md holding the post front matter.",
    after_help = "EXAMPLES:\n\
        \x20 new_post \"Hello World\"\n\
        \x20 new_post \"Hello World\" --date 2024-01-01 --dry-run\n\
        \x20 new_post my_notes --variant classic --slug-style verbatim\n\
        \x20 new_post \"Release notes\" --content-root ~/blog/docs",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub new: NewArgs,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// What to scaffold, and where.
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Human-readable post title; written to the front matter verbatim.
    #[arg(value_name = "TITLE", help = "Post title")]
    pub title: String,

    /// Directory holding `posts/`. Defaults to `docs/` next to the executable.
    #[arg(
        short = 'r',
        long = "content-root",
        value_name = "DIR",
        help = "Content root containing the posts directory"
    )]
    pub content_root: Option<PathBuf>,

    #[arg(
        long = "variant",
        value_name = "VARIANT",
        value_enum,
        help = "index.md template variant"
    )]
    pub variant: Option<Variant>,

    #[arg(
        long = "slug-style",
        value_name = "STYLE",
        value_enum,
        help = "How the title becomes the directory name"
    )]
    pub slug_style: Option<SlugStyleArg>,

    /// File the post under this day instead of today.
    #[arg(
        short = 'd',
        long = "date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Post date (default: today)"
    )]
    pub date: Option<PostDate>,

    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Keep a half-created post directory when a later step fails.
    #[arg(long = "no-rollback", help = "Do not remove partial output on failure")]
    pub no_rollback: bool,
}

fn parse_date(raw: &str) -> Result<PostDate, String> {
    raw.parse::<PostDate>().map_err(|e| e.to_string())
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Variant {
    /// Front matter, hero image, one header. Also accepted as `a`.
    #[value(alias = "a")]
    Classic,
    /// Adds snippet includes and a figure block. Also accepted as `b`.
    #[value(alias = "b")]
    Extended,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// Slug derivation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SlugStyleArg {
    /// Use the title unchanged. Also accepted as `raw`.
    #[value(alias = "raw")]
    Verbatim,
    /// Lowercase; spaces and underscores become hyphens. Also accepted as `slug`.
    #[value(alias = "slug")]
    Hyphenated,
}

impl std::fmt::Display for SlugStyleArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verbatim => write!(f, "verbatim"),
            Self::Hyphenated => write!(f, "hyphenated"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
