use anyhow::Result;

use super::super::args::ListCommand;
use super::helper::{finish, scan, session_from_args};
use super::{CommandResult, CommandSummary, ListSummary};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let mut session = session_from_args(&cmd.scan)?;
    let outcome = scan(&mut session)?;

    let summary = ListSummary {
        registry: session.registry().clone(),
        json: cmd.json,
    };
    Ok(finish(
        CommandSummary::List(summary),
        session.root().to_path_buf(),
        outcome,
    ))
}
