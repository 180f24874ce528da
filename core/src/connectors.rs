//! Connectors: people whose removal disconnects part of the graph.
//!
//! Articulation points via Tarjan's low-link DFS, run from every unvisited
//! root so disconnected graphs are covered. The traversal uses an explicit
//! frame stack, so chains of any length are safe.

use crate::graph::{PersonId, SocialGraph};

const UNVISITED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Frame {
    person: PersonId,
    parent: Option<PersonId>,
    next: usize,
}

/// Names of all connectors, in person-sequence order.
///
/// Returns None for an empty graph, and `Some(vec![])` when the graph has
/// people but no connectors.
pub fn find_connectors<G: SocialGraph + ?Sized>(graph: &G) -> Option<Vec<String>> {
    let n = graph.person_count();
    if n == 0 {
        return None;
    }

    let mut discovery = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut is_connector = vec![false; n];
    // Single discovery counter shared by every frame of every root.
    let mut counter = 0;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if discovery[root] != UNVISITED {
            continue;
        }

        discovery[root] = counter;
        low[root] = counter;
        counter += 1;
        let mut root_children = 0;
        stack.push(Frame {
            person: root,
            parent: None,
            next: 0,
        });

        while let Some(top) = stack.len().checked_sub(1) {
            let Frame { person: v, parent, next } = stack[top];
            let friends = graph.neighbors_of(v);

            if next < friends.len() {
                stack[top].next += 1;
                let w = friends[next];
                if discovery[w] == UNVISITED {
                    if v == root {
                        root_children += 1;
                    }
                    discovery[w] = counter;
                    low[w] = counter;
                    counter += 1;
                    stack.push(Frame {
                        person: w,
                        parent: Some(v),
                        next: 0,
                    });
                } else if parent != Some(w) {
                    // Back-edge
                    low[v] = low[v].min(discovery[w]);
                }
                continue;
            }

            // v is finished: fold its low-link into the parent.
            stack.pop();
            if let Some(u) = parent {
                low[u] = low[u].min(low[v]);
                if low[v] >= discovery[u] && u != root {
                    is_connector[u] = true;
                }
            }
        }

        if root_children > 1 {
            is_connector[root] = true;
        }
        tracing::trace!(root, root_children, "connector traversal done");
    }

    let connectors: Vec<String> = is_connector
        .iter()
        .enumerate()
        .filter(|&(_, &flag)| flag)
        .map(|(i, _)| graph.person_at(i).name().to_string())
        .collect();

    tracing::debug!(people = n, connectors = connectors.len(), "connectors computed");
    Some(connectors)
}
