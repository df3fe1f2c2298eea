//! Domain value objects: Title, Slug, PostDate, SlugStyle, TemplateVariant.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Constructors enforce the invariants, so anything holding a `Title` or a
//! `PostDate` can assume it is well-formed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// `YYYY-MM-DD`, the only date representation used in paths and front matter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ── Title ────────────────────────────────────────────────────────────────────

/// Human-readable post title, exactly as the user typed it.
///
/// Invariant: not blank, and usable as a single path component once slugged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        if raw == "." || raw == ".." {
            return Err(DomainError::InvalidTitle {
                title: raw,
                reason: "title cannot be a relative path marker".into(),
            });
        }
        if raw.contains(['/', '\\']) {
            return Err(DomainError::InvalidTitle {
                title: raw,
                reason: "title cannot contain path separators".into(),
            });
        }
        if raw.contains('\0') {
            return Err(DomainError::InvalidTitle {
                title: raw,
                reason: "title cannot contain NUL bytes".into(),
            });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


// ── Slug ─────────────────────────────────────────────────────────────────────

/// Directory-name form of a title, produced by a [`SlugStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn from_title(title: &Title, style: SlugStyle) -> Self {
        Self(style.apply(title.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase the input and turn every space or underscore into a hyphen.
///
/// Other punctuation is kept as-is. Idempotent.
pub fn slugify(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

// ── SlugStyle ────────────────────────────────────────────────────────────────

/// How a title turns into the directory-name suffix.
///
/// Deserialises through [`FromStr`], so config files accept the same
/// spellings (`raw`, `slug`) as the parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SlugStyle {
    /// Title used unchanged.
    Verbatim,
    /// Lowercased, spaces and underscores replaced by `-`.
    #[default]
    Hyphenated,
}

impl SlugStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::Hyphenated => "hyphenated",
        }
    }

    pub fn apply(self, title: &str) -> String {
        match self {
            Self::Verbatim => title.to_owned(),
            Self::Hyphenated => slugify(title),
        }
    }
}

impl fmt::Display for SlugStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlugStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbatim" | "raw" => Ok(Self::Verbatim),
            "hyphenated" | "slug" => Ok(Self::Hyphenated),
            other => Err(DomainError::UnknownSlugStyle(other.to_owned())),
        }
    }
}

impl TryFrom<String> for SlugStyle {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── TemplateVariant ──────────────────────────────────────────────────────────

/// Which `index.md` body gets written.
///
/// `a` and `b` are accepted for `classic` and `extended`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TemplateVariant {
    /// Front matter, `.jpg` hero image, intro, one header.
    Classic,
    /// Adds snippet includes and a figure block, `.webp` assets.
    #[default]
    Extended,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 2] = [Self::Classic, Self::Extended];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" | "a" => Ok(Self::Classic),
            "extended" | "b" => Ok(Self::Extended),
            other => Err(DomainError::UnknownVariant(other.to_owned())),
        }
    }
}

impl TryFrom<String> for TemplateVariant {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── PostDate ─────────────────────────────────────────────────────────────────

/// Calendar date a post is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostDate(NaiveDate);

impl PostDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year/month/day, rejecting impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Accepts exactly `YYYY-MM-DD`: zero-padded, no surrounding whitespace.
impl FromStr for PostDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidDate { input: s.to_owned() };
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| invalid())?;
        // chrono takes `2024-1-1`; only the canonical spelling round-trips.
        if date.format(DATE_FORMAT).to_string() != s {
            return Err(invalid());
        }
        Ok(Self(date))
    }
}

impl From<NaiveDate> for PostDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
