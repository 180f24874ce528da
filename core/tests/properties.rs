//! Property tests: the three queries checked against brute-force references
//! on small random graphs.

use std::collections::{BTreeMap, BTreeSet};

use friend_graph_core::{find_connectors, find_groups, shortest_chain, Graph, Person, SocialGraph};
use proptest::prelude::*;

const SCHOOLS: [&str; 2] = ["raritan", "rutgers"];

/// A generated graph: per-person school choice plus an edge list.
#[derive(Debug, Clone)]
struct Spec {
    schools: Vec<Option<usize>>,
    edges: Vec<(usize, usize)>,
}

fn spec_strategy() -> impl Strategy<Value = Spec> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::option::of(0..SCHOOLS.len()), n),
            prop::collection::vec((0..n, 0..n), 0..(n * 2)),
        )
            .prop_map(|(schools, edges)| Spec { schools, edges })
    })
}

fn name(i: usize) -> String {
    format!("p{i}")
}

/// Build a graph, placing original person `i` at position `order[i]`.
fn build(spec: &Spec, order: &[usize]) -> Graph {
    let n = spec.schools.len();
    let mut slots: Vec<usize> = vec![0; n];
    for (original, &position) in order.iter().enumerate() {
        slots[position] = original;
    }

    let mut g = Graph::new();
    for &original in &slots {
        let person = match spec.schools[original] {
            Some(s) => Person::student(name(original), SCHOOLS[s]),
            None => Person::non_student(name(original)),
        };
        g.add_person(person).unwrap();
    }
    for &(a, b) in &spec.edges {
        if a != b {
            g.add_friendship(&name(a), &name(b)).unwrap();
        }
    }
    g
}

fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// All-pairs hop distances (Floyd-Warshall).
fn distances(g: &Graph) -> Vec<Vec<Option<usize>>> {
    let n = g.person_count();
    let mut d = vec![vec![None; n]; n];
    for v in 0..n {
        d[v][v] = Some(0);
        for &w in g.neighbors_of(v) {
            d[v][w] = Some(1);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                    if d[i][j].map_or(true, |c| a + b < c) {
                        d[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    d
}

/// Component label per person, optionally ignoring one person.
fn components(g: &Graph, removed: Option<usize>) -> Vec<Option<usize>> {
    let n = g.person_count();
    let mut label = vec![None; n];
    let mut next = 0;
    for start in 0..n {
        if Some(start) == removed || label[start].is_some() {
            continue;
        }
        let mut stack = vec![start];
        label[start] = Some(next);
        while let Some(v) = stack.pop() {
            for &w in g.neighbors_of(v) {
                if Some(w) != removed && label[w].is_none() {
                    label[w] = Some(next);
                    stack.push(w);
                }
            }
        }
        next += 1;
    }
    label
}

fn component_count(labels: &[Option<usize>]) -> usize {
    labels.iter().flatten().collect::<BTreeSet<_>>().len()
}

fn brute_force_connectors(g: &Graph) -> BTreeSet<String> {
    let before = component_count(&components(g, None));
    (0..g.person_count())
        .filter(|&v| component_count(&components(g, Some(v))) > before)
        .map(|v| g.person_at(v).name().to_string())
        .collect()
}

proptest! {
    #[test]
    fn chain_length_matches_distance(spec in spec_strategy()) {
        let g = build(&spec, &identity(spec.schools.len()));
        let d = distances(&g);
        let n = g.person_count();
        for a in 0..n {
            for b in 0..n {
                let chain = shortest_chain(&g, &name(a), &name(b));
                match d[a][b] {
                    None => prop_assert!(chain.is_none()),
                    Some(hops) => {
                        let chain = chain.unwrap();
                        prop_assert_eq!(chain.len(), hops + 1);
                        prop_assert_eq!(&chain[0], &name(a));
                        prop_assert_eq!(chain.last().unwrap(), &name(b));
                        for pair in chain.windows(2) {
                            let x = g.index_of(&pair[0]).unwrap();
                            let y = g.index_of(&pair[1]).unwrap();
                            prop_assert!(g.neighbors_of(x).contains(&y));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn connectors_match_brute_force(spec in spec_strategy()) {
        let g = build(&spec, &identity(spec.schools.len()));
        let found: BTreeSet<String> = find_connectors(&g).unwrap().into_iter().collect();
        prop_assert_eq!(found, brute_force_connectors(&g));
    }

    #[test]
    fn connectors_invariant_under_relabeling(
        (spec, order) in spec_strategy().prop_flat_map(|spec| {
            let n = spec.schools.len();
            (Just(spec), Just(identity(n)).prop_shuffle())
        })
    ) {
        let original = build(&spec, &identity(spec.schools.len()));
        let relabeled = build(&spec, &order);
        let a: BTreeSet<String> = find_connectors(&original).unwrap().into_iter().collect();
        let b: BTreeSet<String> = find_connectors(&relabeled).unwrap().into_iter().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn groups_partition_students_by_component(spec in spec_strategy()) {
        let g = build(&spec, &identity(spec.schools.len()));
        let labels = components(&g, None);

        for school in SCHOOLS {
            let mut expected: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
            for v in 0..g.person_count() {
                if g.person_at(v).attends(school) {
                    if let Some(label) = labels[v] {
                        expected.entry(label).or_default().insert(name(v));
                    }
                }
            }
            let expected: BTreeSet<BTreeSet<String>> = expected.into_values().collect();

            match find_groups(&g, school) {
                None => prop_assert!(expected.is_empty()),
                Some(groups) => {
                    let found: BTreeSet<BTreeSet<String>> = groups
                        .into_iter()
                        .map(|group| group.into_iter().collect())
                        .collect();
                    prop_assert_eq!(found, expected);
                }
            }
        }
    }
}
