use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::state::GraphState;
use crate::util::{emit, Report};

#[derive(Debug, Serialize)]
pub struct CliquesReport {
    pub school: String,
    /// Empty when nobody attends the school.
    pub cliques: Vec<Vec<String>>,
}

impl Report for CliquesReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.cliques.is_empty() {
            return writeln!(out, "no students attend {}", self.school);
        }
        for (i, clique) in self.cliques.iter().enumerate() {
            writeln!(out, "clique {} ({} students): {}", i + 1, clique.len(), clique.join(", "))?;
        }
        Ok(())
    }
}

pub fn cliques(gs: &GraphState, school: &str) -> CliquesReport {
    let school = school.trim().to_lowercase();
    let cliques = friend_graph_core::find_groups(&gs.graph, &school).unwrap_or_default();
    CliquesReport { school, cliques }
}

pub fn run(gs: &GraphState, school: &str, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    emit(out, format, &cliques(gs, school))
}
