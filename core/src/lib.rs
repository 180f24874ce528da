//! friend-graph-core: In-memory social graph analysis.
//!
//! A pure Rust library that holds a person registry with adjacency lists and
//! answers three structural queries over it: the shortest acquaintance chain
//! between two people, cliques of students at one school, and connectors
//! (articulation points).
//!
//! The queries are generic over [`SocialGraph`], so any store that exposes
//! stable indices and ordered neighbor lists can be analysed. [`Graph`] is
//! the bundled implementation.

mod connectors;
mod error;
mod graph;
mod groups;
mod traversal;

pub use connectors::find_connectors;
pub use error::GraphError;
pub use graph::{Graph, Person, PersonId, SocialGraph};
pub use groups::find_groups;
pub use traversal::shortest_chain;
