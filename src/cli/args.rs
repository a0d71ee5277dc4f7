//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scan the project and print (or write) the manifest module
//! - `list`: Scan the project and show the routable records
//! - `resolve`: Show how a module id resolves
//! - `init`: Initialize a routable configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's scan args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.scan.verbose,
            Some(Command::List(cmd)) => cmd.scan.verbose,
            Some(Command::Resolve(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by the commands that scan the project.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Project root directory (default: current directory)
    #[arg(long, env = "ROUTABLE_ROOT")]
    pub root: Option<PathBuf>,

    /// Directories to scan, relative to the root (overrides config file)
    /// Can be specified multiple times: --paths src/controllers --paths src/pages
    #[arg(long, value_name = "DIR", value_delimiter = ',')]
    pub paths: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Write the manifest to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print the registry as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Module id to resolve
    pub id: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan for routable files and emit the manifest module
    Generate(GenerateCommand),
    /// Scan for routable files and list their match patterns
    List(ListCommand),
    /// Resolve a module id the way the bundler hook does
    Resolve(ResolveCommand),
    /// Initialize a new .routablerc.json configuration file
    Init,
}
