use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::state::GraphState;
use crate::util::{emit, Report};

#[derive(Debug, Serialize)]
pub struct ConnectorsReport {
    pub connectors: Vec<String>,
}

impl Report for ConnectorsReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.connectors.is_empty() {
            return writeln!(out, "no connectors");
        }
        writeln!(out, "{} connectors:", self.connectors.len())?;
        for name in &self.connectors {
            writeln!(out, "  {name}")?;
        }
        Ok(())
    }
}

pub fn connectors(gs: &GraphState) -> ConnectorsReport {
    ConnectorsReport {
        connectors: friend_graph_core::find_connectors(&gs.graph).unwrap_or_default(),
    }
}

pub fn run(gs: &GraphState, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    emit(out, format, &connectors(gs))
}
