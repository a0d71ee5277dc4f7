//! Report formatting and printing utilities.
//!
//! Diagnostics and status lines go to stderr so that `generate` can pipe the
//! manifest itself through stdout. Separate from core logic to allow routable to be
//! used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, ListSummary, ResolveSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Diagnostic, Registry};
use crate::utils::route_path;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    print_to(result, verbose, &mut out, &mut err);
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    print_diagnostics_to(&result.diagnostics, &result.root, err);
    if verbose {
        print_empty_declarations_to(&result.empty_declarations, err);
    }

    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, result, out, err),
        CommandSummary::List(summary) => print_list(summary, result, out, err),
        CommandSummary::Resolve(summary) => print_resolve(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

/// Print malformed declarations in cargo-style format.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], root: &Path, writer: &mut W) {
    for diagnostic in diagnostics {
        let _ = writeln!(
            writer,
            "{}: malformed {}: {}",
            "error".bold().red(),
            diagnostic.site,
            diagnostic.reason
        );
        let display_path = route_path(root, Path::new(&diagnostic.file_path));
        let _ = writeln!(
            writer,
            "  {} {}:{}",
            "-->".blue(),
            display_path.trim_start_matches('/'),
            diagnostic.line
        );
    }

    if !diagnostics.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} malformed {} skipped",
            FAILURE_MARK.red(),
            diagnostics.len(),
            if diagnostics.len() == 1 {
                "declaration"
            } else {
                "declarations"
            }
        );
    }
}

fn print_empty_declarations_to<W: Write>(paths: &[String], writer: &mut W) {
    for path in paths {
        let _ = writeln!(
            writer,
            "{} {} declares routable targets but no string or regex patterns were found",
            "warning:".bold().yellow(),
            path
        );
    }
}

fn print_generate<O: Write, E: Write>(
    summary: &GenerateSummary,
    result: &CommandResult,
    out: &mut O,
    err: &mut E,
) {
    match &summary.output {
        Some(path) => {
            let _ = writeln!(
                err,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} ({} {} from {} scanned {})",
                    path.display(),
                    summary.entry_count,
                    plural(summary.entry_count, "entry", "entries"),
                    result.files_scanned,
                    plural(result.files_scanned, "file", "files")
                )
                .green()
            );
        }
        None => {
            let _ = writeln!(out, "{}", summary.manifest);
        }
    }
}

fn print_list<O: Write, E: Write>(
    summary: &ListSummary,
    result: &CommandResult,
    out: &mut O,
    err: &mut E,
) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.registry) {
            Ok(json) => {
                let _ = writeln!(out, "{}", json);
            }
            Err(e) => {
                let _ = writeln!(err, "{} {}", "error:".bold().red(), e);
            }
        }
        return;
    }

    print_registry_to(&summary.registry, out);
    let _ = writeln!(
        err,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} routable {} in {} scanned {}",
            summary.registry.len(),
            plural(summary.registry.len(), "file", "files"),
            result.files_scanned,
            plural(result.files_scanned, "file", "files")
        )
        .green()
    );
}

/// Print one line per record: path, match target and patterns, with the path
/// column aligned.
pub fn print_registry_to<W: Write>(registry: &Registry, writer: &mut W) {
    let path_width = registry
        .iter()
        .map(|r| UnicodeWidthStr::width(r.path.as_str()))
        .max()
        .unwrap_or(0);

    for record in registry {
        let padding = path_width - UnicodeWidthStr::width(record.path.as_str());
        let target = record
            .match_target
            .map(|t| format!("[{}] ", t))
            .unwrap_or_default();
        let patterns: Vec<String> = record.patterns.iter().map(|p| p.to_string()).collect();
        let _ = writeln!(
            writer,
            "{}{}  {}{}",
            record.path.cyan(),
            " ".repeat(padding),
            target.dimmed(),
            patterns.join(", ")
        );
    }
}

fn print_resolve<O: Write, E: Write>(summary: &ResolveSummary, out: &mut O, err: &mut E) {
    match summary.resolved {
        Some(resolved) => {
            let _ = writeln!(out, "{}", resolved.escape_debug());
        }
        None => {
            let _ = writeln!(
                err,
                "{} \"{}\" is not the routable manifest module",
                "warning:".bold().yellow(),
                summary.id
            );
        }
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
