//! Interactive query loop over a graph loaded once.

use std::io::{BufRead, Write};

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::state::GraphState;
use crate::{cliques, connectors, path, status};

const HELP: &str = "\
commands:
  chain <from> <to>    shortest chain of friends
  chain <from> | <to>  same, for names containing spaces
  cliques <school>     groups of connected students at a school
  connectors           people whose removal splits the graph
  status               graph summary
  help                 this message
  quit                 leave the shell";

const CHAIN_USAGE: &str = "usage: chain <from> <to>, or chain <from> | <to> when a name has spaces";

/// Split `chain` arguments into two names.
///
/// A `|` separates the names when present (person names never contain one);
/// otherwise exactly two words are expected.
fn chain_args(rest: &str) -> Option<(&str, &str)> {
    if let Some((from, to)) = rest.split_once('|') {
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() || to.contains('|') {
            return None;
        }
        return Some((from, to));
    }
    let mut words = rest.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(from), Some(to), None) => Some((from, to)),
        _ => None,
    }
}

/// Read commands from `input` until EOF or `quit`.
///
/// Query failures such as unknown names are reported inline and do not end
/// the session. I/O failures do.
pub fn run(
    gs: &GraphState,
    format: OutputFormat,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: bool,
) -> Result<()> {
    let mut line = String::new();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim()));
        let result = match command {
            "" => Ok(()),
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}").map_err(Error::from),
            "chain" => match chain_args(rest) {
                Some((from, to)) => path::run(gs, from, to, format, out),
                None => writeln!(out, "{CHAIN_USAGE}").map_err(Error::from),
            },
            "cliques" if !rest.is_empty() => {
                let school: Vec<&str> = rest.split_whitespace().collect();
                cliques::run(gs, &school.join(" "), format, out)
            }
            "connectors" if rest.is_empty() => connectors::run(gs, format, out),
            "status" if rest.is_empty() => status::run(gs, format, out),
            other => writeln!(out, "unknown command '{other}' (try 'help')").map_err(Error::from),
        };

        match result {
            Ok(()) => {}
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => {
                tracing::debug!(error = %e, "shell command failed");
                writeln!(out, "error: {e}")?;
            }
        }
    }
    Ok(())
}
