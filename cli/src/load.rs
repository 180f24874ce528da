//! Friendship file loading.
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|y|rutgers
//! kaitlin|n
//! aparna|y|penn state
//! sam|jane
//! jane|kaitlin
//! ```
//!
//! The first line is the number of people, followed by exactly that many
//! person lines (`name|y|school` for students, `name|n` otherwise), then any
//! number of `name|name` friendship lines. Blank lines are skipped. Names and
//! schools are trimmed and lower-cased.

use std::path::Path;

use friend_graph_core::{Graph, Person};

use crate::error::{Error, Result};

/// Read and parse a friendship file.
pub fn load_file(path: &Path, max_people: u64) -> Result<Graph> {
    let text = std::fs::read_to_string(path)?;
    let graph = parse_graph(&text, max_people)?;
    tracing::info!(
        path = %path.display(),
        people = graph.people().len(),
        friendships = graph.friendship_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Graph pre-allocation for a header `count` followed by `remaining`
/// non-blank lines. The header alone never sizes the graph.
fn initial_capacity(count: u64, remaining: usize) -> (usize, usize) {
    let people = usize::try_from(count).unwrap_or(usize::MAX).min(remaining);
    (people, remaining - people)
}

/// Parse friendship-format text into a graph.
pub fn parse_graph(text: &str, max_people: u64) -> Result<Graph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| Error::parse(1, "missing person count"))?;
    let count: u64 = header
        .parse()
        .map_err(|_| Error::parse(header_line, format!("invalid person count '{header}'")))?;
    if count > max_people {
        return Err(Error::TooLarge {
            people: count,
            max: max_people,
        });
    }

    let (people, friendships) = initial_capacity(count, lines.clone().count());
    let mut graph = Graph::with_capacity(people, friendships);

    let mut last_line = header_line;
    for seen in 0..count {
        let Some((line_no, line)) = lines.next() else {
            return Err(Error::parse(
                last_line,
                format!("expected {count} people, found {seen}"),
            ));
        };
        last_line = line_no;
        let person = parse_person(line_no, line)?;
        graph
            .add_person(person)
            .map_err(|source| Error::Graph { line: line_no, source })?;
    }

    for (line_no, line) in lines {
        let (a, b) = parse_friendship(line_no, line)?;
        let added = graph
            .add_friendship(&a, &b)
            .map_err(|source| Error::Graph { line: line_no, source })?;
        if !added {
            tracing::debug!(line = line_no, a = %a, b = %b, "duplicate friendship ignored");
        }
    }

    Ok(graph)
}

fn parse_person(line_no: usize, line: &str) -> Result<Person> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let name = match fields.first() {
        Some(name) if !name.is_empty() => name.to_lowercase(),
        _ => return Err(Error::parse(line_no, "person line has no name")),
    };

    match fields.as_slice() {
        [_, flag] | [_, flag, _] if flag.eq_ignore_ascii_case("n") => Ok(Person::non_student(name)),
        [_, flag, school] if flag.eq_ignore_ascii_case("y") => {
            if school.is_empty() {
                Err(Error::parse(line_no, format!("student '{name}' has no school")))
            } else {
                Ok(Person::student(name, school))
            }
        }
        [_, flag] if flag.eq_ignore_ascii_case("y") => {
            Err(Error::parse(line_no, format!("student '{name}' has no school")))
        }
        [_, flag] | [_, flag, _] => Err(Error::parse(
            line_no,
            format!("unknown student flag '{flag}' (expected y or n)"),
        )),
        _ => Err(Error::parse(
            line_no,
            format!("malformed person line '{line}'"),
        )),
    }
}

fn parse_friendship(line_no: usize, line: &str) -> Result<(String, String)> {
    match line.split('|').map(str::trim).collect::<Vec<_>>().as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => Ok((a.to_lowercase(), b.to_lowercase())),
        _ => Err(Error::parse(
            line_no,
            format!("malformed friendship line '{line}'"),
        )),
    }
}
