//! Error types for the friend-graph front end.
//!
//! Query results that are merely absent (no chain, no students, no
//! connectors) are not errors; they are rendered as empty results. Errors
//! cover everything that stops a command: unreadable or malformed graph
//! files, bad configuration, and names that do not exist in the graph.

use friend_graph_core::GraphError;
use thiserror::Error;

/// Result type for friend-graph front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading the graph file or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph file is not in the friendship format
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The graph file is well-formed but describes an invalid graph
    #[error("invalid graph at line {line}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },

    /// The graph declares more people than the configured limit
    #[error("graph declares {people} people, exceeds max_people={max}")]
    TooLarge { people: u64, max: u64 },

    /// A queried name is not in the graph
    #[error("person '{0}' not found")]
    UnknownPerson(String),

    /// JSON rendering failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
