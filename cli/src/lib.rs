//! friend-graph-cli: command-line front end for friend-graph-core.
//!
//! Loads a friendship file once into a [`state::GraphState`] and runs
//! shortest-chain, clique and connector queries against it, either as
//! one-shot commands or from an interactive shell.

pub mod app;
pub mod cliques;
pub mod config;
pub mod connectors;
pub mod error;
pub mod load;
pub mod logging;
pub mod path;
pub mod shell;
pub mod state;
pub mod status;
pub mod util;

pub use error::{Error, Result};
