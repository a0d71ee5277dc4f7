use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use routable::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match routable::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
