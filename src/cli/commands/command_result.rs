use std::path::PathBuf;

use super::super::ExitStatus;
use crate::core::{Diagnostic, Registry};

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    List(ListSummary),
    Resolve(ResolveSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    /// Generated module source.
    pub manifest: String,
    /// Where the manifest was written; `None` means stdout.
    pub output: Option<PathBuf>,
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct ListSummary {
    pub registry: Registry,
    pub json: bool,
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub id: String,
    pub resolved: Option<&'static str>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a routable command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Project root the scan ran against.
    pub root: PathBuf,
    /// Malformed declarations reported by the scan.
    pub diagnostics: Vec<Diagnostic>,
    /// Files with a declaration site that yielded no patterns (manifest paths).
    pub empty_declarations: Vec<String>,
    /// Number of source files read and parsed.
    pub files_scanned: usize,
}

impl CommandResult {
    /// Result for commands that do not scan.
    pub fn without_scan(summary: CommandSummary) -> Self {
        Self {
            summary,
            root: PathBuf::from("."),
            diagnostics: Vec::new(),
            empty_declarations: Vec::new(),
            files_scanned: 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        let failed = match &self.summary {
            CommandSummary::Resolve(summary) => summary.resolved.is_none(),
            CommandSummary::Init(summary) => !summary.created,
            CommandSummary::Generate(_) | CommandSummary::List(_) => false,
        };
        if failed || !self.diagnostics.is_empty() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
