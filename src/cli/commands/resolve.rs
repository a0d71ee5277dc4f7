use super::super::args::ResolveCommand;
use super::{CommandResult, CommandSummary, ResolveSummary};
use crate::config::Config;
use crate::core::BuildSession;

pub fn resolve(cmd: ResolveCommand) -> CommandResult {
    let session = BuildSession::new(Config::default());
    let resolved = session.resolve_id(&cmd.id);

    CommandResult::without_scan(CommandSummary::Resolve(ResolveSummary {
        id: cmd.id,
        resolved,
    }))
}
