use std::fs;

use anyhow::{Context, Result};

use super::super::args::GenerateCommand;
use super::helper::{finish, scan, session_from_args};
use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::core::RESOLVED_VIRTUAL_MODULE_ID;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let mut session = session_from_args(&cmd.scan)?;
    let outcome = scan(&mut session)?;

    let manifest = session
        .load(RESOLVED_VIRTUAL_MODULE_ID)
        .context("Manifest module is not available")?;

    if let Some(output) = &cmd.output {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(output, format!("{}\n", manifest))
            .with_context(|| format!("Failed to write manifest: {}", output.display()))?;
    }

    let summary = GenerateSummary {
        manifest,
        output: cmd.output,
        entry_count: session.registry().len(),
    };
    Ok(finish(
        CommandSummary::Generate(summary),
        session.root().to_path_buf(),
        outcome,
    ))
}
