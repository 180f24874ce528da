use std::collections::VecDeque;

use crate::graph::{PersonId, SocialGraph};

/// Shortest acquaintance chain from `from` to `to` using BFS (unweighted).
///
/// Returns the names along the chain, starting with `from` and ending with
/// `to`; each consecutive pair is a friendship. Returns `Some(vec![from])`
/// when both names are the same person.
///
/// Returns None if either name is unknown or no chain exists. When several
/// shortest chains exist, the one found first in adjacency order wins.
pub fn shortest_chain<G: SocialGraph + ?Sized>(graph: &G, from: &str, to: &str) -> Option<Vec<String>> {
    let start = graph.index_of(from)?;
    let target = graph.index_of(to)?;

    if start == target {
        return Some(vec![graph.person_at(start).name().to_string()]);
    }

    // Parent pointers: predecessor[v] is the person v was first reached from.
    // The start node is its own predecessor and doubles as the visited flag.
    let mut predecessor: Vec<Option<PersonId>> = vec![None; graph.person_count()];
    let mut queue: VecDeque<PersonId> = VecDeque::new();

    predecessor[start] = Some(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let chain = reconstruct_chain(graph, &predecessor, start, target);
            tracing::debug!(from, to, hops = chain.len() - 1, "shortest chain found");
            return Some(chain);
        }

        for &friend in graph.neighbors_of(current) {
            if predecessor[friend].is_none() {
                predecessor[friend] = Some(current);
                queue.push_back(friend);
            }
        }
    }

    tracing::debug!(from, to, "no chain");
    None
}

/// Walk parent pointers from `target` back to `start`, collecting names.
fn reconstruct_chain<G: SocialGraph + ?Sized>(
    graph: &G,
    predecessor: &[Option<PersonId>],
    start: PersonId,
    target: PersonId,
) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = target;

    loop {
        chain.push(graph.person_at(current).name().to_string());
        if current == start {
            break;
        }
        match predecessor[current] {
            Some(parent) => current = parent,
            None => break,
        }
    }

    chain.reverse();
    chain
}
