//! Command-line entry point: argument parsing, dispatch and error reporting.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::Settings;
use crate::error::Result;
use crate::state::GraphState;
use crate::{cliques, connectors, path, shell, status};

/// friend-graph: shortest chains, school cliques and connectors in a social graph.
#[derive(Parser)]
#[command(name = "friend-graph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Shortest chain of friends between two people
    Chain {
        /// Person the chain starts at
        from: String,
        /// Person the chain ends at
        to: String,
    },

    /// Groups of students at a school connected through the graph
    Cliques {
        /// School name (case-insensitive)
        school: String,
    },

    /// People whose removal would disconnect the graph
    Connectors,

    /// Show graph statistics
    Status,

    /// Load the graph once and read commands from stdin
    Shell,
}

/// Load the configured graph and run one command, writing results to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let gs = GraphState::load(&cli.settings)?;
    let format = cli.settings.format;

    match cli.command {
        Commands::Chain { from, to } => path::run(&gs, &from, &to, format, out)?,
        Commands::Cliques { school } => cliques::run(&gs, &school, format, out)?,
        Commands::Connectors => connectors::run(&gs, format, out)?,
        Commands::Status => status::run(&gs, format, out)?,
        Commands::Shell => {
            let stdin = std::io::stdin();
            let prompt = stdin.is_terminal();
            shell::run(&gs, format, &mut stdin.lock(), out, prompt)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Turn a command result into the process exit code, printing any error
/// and its cause chain to `err`.
pub fn finish(result: Result<()>, err: &mut dyn Write) -> ExitCode {
    let Err(e) = result else {
        return ExitCode::SUCCESS;
    };
    // stderr write failures leave nothing to report to
    let _ = writeln!(err, "{}: {e}", "error".red().bold());
    let mut source = std::error::Error::source(&e);
    while let Some(cause) = source {
        let _ = writeln!(err, "  {}: {cause}", "caused by".dimmed());
        source = std::error::Error::source(cause);
    }
    ExitCode::FAILURE
}
