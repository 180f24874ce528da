use std::path::PathBuf;
use std::time::Instant;

use friend_graph_core::{Graph, PersonId, SocialGraph};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::load;

/// A loaded graph plus metadata about where and when it came from.
///
/// Built once per process, then only borrowed immutably by queries.
pub struct GraphState {
    pub graph: Graph,
    pub source: PathBuf,
    pub load_time_ms: f64,
    pub loaded_at: Instant,
}

impl GraphState {
    /// Load the graph file named by `settings`.
    pub fn load(settings: &Settings) -> Result<Self> {
        let path = settings.graph_path()?;
        let start = Instant::now();
        let graph = load::load_file(path, settings.max_people)?;

        Ok(Self {
            graph,
            source: path.to_path_buf(),
            load_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            loaded_at: Instant::now(),
        })
    }

    /// Wrap an already-built graph.
    pub fn from_graph(graph: Graph, source: impl Into<PathBuf>) -> Self {
        Self {
            graph,
            source: source.into(),
            load_time_ms: 0.0,
            loaded_at: Instant::now(),
        }
    }
}

/// Normalize a queried name the way the loader normalizes names.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolve a queried name to a person index.
pub fn resolve_person(graph: &Graph, name: &str) -> Result<PersonId> {
    let key = normalize_name(name);
    graph
        .index_of(&key)
        .ok_or_else(|| Error::UnknownPerson(name.to_string()))
}
