//! Cliques of students by school.
//!
//! A group is a maximal set of students of one school that are connected
//! through the full graph. People who are not students of that school can sit
//! on the connecting path; they are traversed but never reported.

use crate::graph::{PersonId, SocialGraph};

/// One pending DFS frame: the person and the next adjacency position to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    person: PersonId,
    next: usize,
}

/// Partition the students of `school` into connectivity groups.
///
/// `school` is matched case-insensitively. Groups are ordered by the position
/// of their first member in the person sequence. Returns None if no student
/// attends `school`.
pub fn find_groups<G: SocialGraph + ?Sized>(graph: &G, school: &str) -> Option<Vec<Vec<String>>> {
    let school = school.to_lowercase();
    let n = graph.person_count();

    // visited is permanent for matching students. Transit people are stamped
    // with the current root's epoch so each traversal enters them once.
    let mut visited = vec![false; n];
    let mut transit_epoch: Vec<usize> = vec![0; n];
    let mut epoch = 0;

    let mut stack: Vec<Frame> = Vec::new();
    let mut post_order: Vec<PersonId> = Vec::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for root in 0..n {
        if visited[root] || !graph.person_at(root).attends(&school) {
            continue;
        }

        epoch += 1;
        visited[root] = true;
        stack.push(Frame { person: root, next: 0 });

        while let Some(top) = stack.len().checked_sub(1) {
            let Frame { person, next } = stack[top];
            let friends = graph.neighbors_of(person);

            if next < friends.len() {
                stack[top].next += 1;
                let friend = friends[next];
                if graph.person_at(friend).attends(&school) {
                    if !visited[friend] {
                        visited[friend] = true;
                        stack.push(Frame { person: friend, next: 0 });
                    }
                } else if transit_epoch[friend] != epoch {
                    transit_epoch[friend] = epoch;
                    stack.push(Frame { person: friend, next: 0 });
                }
            } else {
                stack.pop();
                if graph.person_at(person).attends(&school) {
                    post_order.push(person);
                }
            }
        }

        tracing::trace!(root, members = post_order.len(), "group traversal done");

        // Drain the post-order stack: members come out last-finished first.
        let mut group = Vec::with_capacity(post_order.len());
        while let Some(member) = post_order.pop() {
            group.push(graph.person_at(member).name().to_string());
        }
        if !group.is_empty() {
            groups.push(group);
        }
    }

    tracing::debug!(school = %school, groups = groups.len(), "cliques computed");

    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}
