//! Dispatches parsed arguments to the matching command handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, generate::generate, init::init, list::list, resolve::resolve,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Resolve(cmd)) => Ok(resolve(cmd)),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
