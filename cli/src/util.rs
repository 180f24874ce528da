use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// A command result that can be written as text or JSON.
pub trait Report: Serialize {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Write `report` to `out` in the requested format.
pub fn emit<R: Report>(out: &mut dyn Write, format: OutputFormat, report: &R) -> Result<()> {
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Join names into a chain rendered as `a -- b -- c`.
pub fn chain_str(names: &[String]) -> String {
    names.join(" -- ")
}
