use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::state::GraphState;
use crate::util::{emit, Report};

#[derive(Debug, Serialize)]
pub struct SchoolCount {
    pub school: String,
    pub students: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub source: String,
    pub people: usize,
    pub friendships: usize,
    pub students: usize,
    pub schools: Vec<SchoolCount>,
    pub memory_bytes: usize,
    pub load_time_ms: f64,
    pub loaded_secs_ago: f64,
}

impl Report for StatusReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "source:      {}", self.source)?;
        writeln!(out, "people:      {}", self.people)?;
        writeln!(out, "friendships: {}", self.friendships)?;
        writeln!(out, "students:    {}", self.students)?;
        writeln!(out, "memory:      ~{:.1}KB", self.memory_bytes as f64 / 1024.0)?;
        writeln!(out, "load time:   {:.1}ms", self.load_time_ms)?;
        for s in &self.schools {
            writeln!(out, "  {:<24} {:>8}", s.school, s.students)?;
        }
        Ok(())
    }
}

pub fn status(gs: &GraphState) -> StatusReport {
    StatusReport {
        source: gs.source.display().to_string(),
        people: gs.graph.people().len(),
        friendships: gs.graph.friendship_count(),
        students: gs.graph.student_count(),
        schools: gs
            .graph
            .schools()
            .into_iter()
            .map(|(school, students)| SchoolCount { school, students })
            .collect(),
        memory_bytes: gs.graph.memory_usage(),
        load_time_ms: gs.load_time_ms,
        loaded_secs_ago: gs.loaded_at.elapsed().as_secs_f64(),
    }
}

pub fn run(gs: &GraphState, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    emit(out, format, &status(gs))
}
