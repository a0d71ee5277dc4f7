use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::super::args::ScanArgs;
use super::{CommandResult, CommandSummary};
use crate::config::{Config, load_config};
use crate::core::{BuildSession, ScanOutcome};

/// Build a session for the project described by `args`.
///
/// The config file is looked up from the root; `--paths` replaces its `paths`.
pub fn session_from_args(args: &ScanArgs) -> Result<BuildSession> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    let mut config: Config = load_config(&root)?.config;
    if !args.paths.is_empty() {
        config.paths = args.paths.clone();
        config.validate()?;
    }

    let mut session = BuildSession::new(config);
    session.config_resolved(root);
    Ok(session)
}

/// Run a full scan, attaching the project root to any fatal error.
pub fn scan(session: &mut BuildSession) -> Result<ScanOutcome> {
    let root = session.root().display().to_string();
    session
        .build_start()
        .with_context(|| format!("Scan of {} failed", root))
}

pub fn finish(summary: CommandSummary, root: PathBuf, outcome: ScanOutcome) -> CommandResult {
    CommandResult {
        summary,
        root,
        diagnostics: outcome.diagnostics,
        empty_declarations: outcome.empty_declarations,
        files_scanned: outcome.files_scanned,
    }
}
