use thiserror::Error;

use crate::graph::PersonId;

/// Errors raised while building a graph. Queries never fail; they return None.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("person '{0}' already exists")]
    DuplicatePerson(String),

    #[error("person '{0}' not found")]
    UnknownPerson(String),

    #[error("person '{0}' cannot be their own friend")]
    SelfFriendship(String),

    #[error("person index {index} out of range (graph has {count} people)")]
    IndexOutOfRange { index: PersonId, count: usize },
}
