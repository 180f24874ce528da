use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::state::{self, GraphState};
use crate::util::{chain_str, emit, Report};

#[derive(Debug, Serialize)]
pub struct ChainReport {
    pub from: String,
    pub to: String,
    /// None when the two people are not connected.
    pub chain: Option<Vec<String>>,
}

impl Report for ChainReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        match &self.chain {
            Some(chain) => writeln!(out, "{} ({} hops)", chain_str(chain), chain.len() - 1),
            None => writeln!(out, "no chain between {} and {}", self.from, self.to),
        }
    }
}

/// Shortest chain between two named people.
///
/// Unknown names are an error; unconnected people yield an empty chain.
pub fn chain(gs: &GraphState, from: &str, to: &str) -> Result<ChainReport> {
    let start = state::resolve_person(&gs.graph, from)?;
    let target = state::resolve_person(&gs.graph, to)?;
    let people = gs.graph.people();
    let from = people[start].name();
    let to = people[target].name();

    Ok(ChainReport {
        from: from.to_string(),
        to: to.to_string(),
        chain: friend_graph_core::shortest_chain(&gs.graph, from, to),
    })
}

pub fn run(gs: &GraphState, from: &str, to: &str, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let report = chain(gs, from, to)?;
    emit(out, format, &report)
}
