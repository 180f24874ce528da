use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{Error, Result};

pub const DEFAULT_MAX_PEOPLE: u64 = 1_000_000;

/// Upper bound accepted for `--max-people`.
pub const MAX_PEOPLE_LIMIT: u64 = 100_000_000;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings shared by every command. Each has an environment fallback.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Friendship file to load
    #[arg(long, global = true, env = "FRIEND_GRAPH_FILE")]
    pub graph: Option<PathBuf>,

    /// Refuse graphs that declare more people than this
    #[arg(
        long,
        global = true,
        env = "FRIEND_GRAPH_MAX_PEOPLE",
        default_value_t = DEFAULT_MAX_PEOPLE,
        value_parser = clap::value_parser!(u64).range(1..=MAX_PEOPLE_LIMIT)
    )]
    pub max_people: u64,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "FRIEND_GRAPH_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graph: None,
            max_people: DEFAULT_MAX_PEOPLE,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// The graph file to load, or a configuration error if none was given.
    pub fn graph_path(&self) -> Result<&Path> {
        self.graph.as_deref().ok_or_else(|| {
            Error::Config("no graph file: pass --graph or set FRIEND_GRAPH_FILE".to_string())
        })
    }
}
