//! friend-graph CLI - social graph queries from the command line.

use std::process::ExitCode;

use clap::Parser;
use friend_graph_cli::app::{self, Cli};
use friend_graph_cli::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = app::run(cli, &mut std::io::stdout().lock());
    app::finish(result, &mut std::io::stderr())
}
