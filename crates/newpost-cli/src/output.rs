//! Output management and formatting.
//!
//! Everything the CLI prints on stdout goes through [`OutputManager`];
//! diagnostics go through `tracing` on stderr instead.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use newpost_core::application::ScaffoldReport;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

/// JSON shape of a report.
#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    path: &'a Path,
    slug: &'a str,
    date: String,
    files: &'a [std::path::PathBuf],
    directories: &'a [std::path::PathBuf],
    dry_run: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto → Human on a TTY, Plain when piped.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Print the outcome of a scaffold in the resolved format.
    pub fn report(&self, report: &ScaffoldReport, dry_run: bool) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for line in self.render_report(report, dry_run)? {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    fn render_report(&self, report: &ScaffoldReport, dry_run: bool) -> io::Result<Vec<String>> {
        let lines = match self.resolved_format {
            OutputFormat::Json => vec![report_json(report, dry_run)?],
            OutputFormat::Plain => vec![report.path.display().to_string()],
            OutputFormat::Human | OutputFormat::Auto => self.human_lines(report, dry_run),
        };
        Ok(lines)
    }

    fn human_lines(&self, report: &ScaffoldReport, dry_run: bool) -> Vec<String> {
        let path = report.path.display().to_string();
        let mut lines = Vec::with_capacity(report.directories.len() + report.files.len() + 1);

        lines.push(if dry_run {
            self.indicator("\u{2139}", &format!("Would create {path}"), Tone::Info) // ℹ
        } else {
            self.indicator("\u{2713}", &format!("Created {path}"), Tone::Success) // ✓
        });

        let entries = report
            .directories
            .iter()
            .map(|d| format!("{}/", relative_to(d, &report.path)))
            .chain(report.files.iter().map(|f| relative_to(f, &report.path)));
        for entry in entries {
            lines.push(if self.no_color {
                format!("  + {entry}")
            } else {
                format!("  {} {}", "+".green(), entry)
            });
        }
        lines
    }

    fn indicator(&self, symbol: &str, msg: &str, tone: Tone) -> String {
        if self.no_color {
            return format!("{symbol} {msg}");
        }
        match tone {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Info,
}

fn report_json(report: &ScaffoldReport, dry_run: bool) -> io::Result<String> {
    let json = ReportJson {
        path: &report.path,
        slug: &report.slug,
        date: report.date.to_string(),
        files: &report.files,
        directories: &report.directories,
        dry_run,
    };
    serde_json::to_string(&json).map_err(io::Error::other)
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ── tests ─────────────────────────────────────────────────────────────────────
