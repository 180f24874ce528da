use std::collections::{BTreeMap, HashMap};

use crate::error::GraphError;

/// Position of a person in the graph's person sequence.
pub type PersonId = usize;

/// A person in the social graph.
///
/// Students carry a school name; non-students carry none. School names are
/// lower-cased on construction so that school matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    school: Option<String>,
}

impl Person {
    /// A student attending `school`.
    pub fn student(name: impl Into<String>, school: &str) -> Self {
        Self {
            name: name.into(),
            school: Some(school.to_lowercase()),
        }
    }

    /// A person who is not a student.
    pub fn non_student(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            school: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_student(&self) -> bool {
        self.school.is_some()
    }

    /// School name (lower-cased), or None for non-students.
    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }

    /// True if this person is a student of `school`, which must already be lower-cased.
    pub fn attends(&self, school: &str) -> bool {
        self.school.as_deref() == Some(school)
    }
}

/// Read-only view of a social graph, as consumed by the analysis queries.
///
/// Implementations must keep indices stable and return neighbors in a
/// reproducible order; every index returned by `neighbors_of` must be
/// below `person_count()`.
pub trait SocialGraph {
    fn person_count(&self) -> usize;

    /// Panics if `index >= person_count()`.
    fn person_at(&self, index: PersonId) -> &Person;

    fn index_of(&self, name: &str) -> Option<PersonId>;

    /// Panics if `index >= person_count()`.
    fn neighbors_of(&self, index: PersonId) -> &[PersonId];
}

/// In-memory social graph: person registry + adjacency lists + name index.
///
/// Friendships are undirected and stored on both sides — `friends[a]`
/// contains b and `friends[b]` contains a. Adjacency order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    people: Vec<Person>,
    friends: Vec<Vec<PersonId>>,
    name_index: HashMap<String, PersonId>,
    /// Initial capacity of each new adjacency list.
    degree_hint: usize,
}

/// Upper bound on the per-person adjacency pre-allocation.
const MAX_DEGREE_HINT: usize = 64;

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    ///
    /// `friendships` sets the average degree each new person's friend list
    /// starts with, capped at 64.
    pub fn with_capacity(people: usize, friendships: usize) -> Self {
        let degree_hint = match people {
            0 => 0,
            n => friendships.saturating_mul(2).div_ceil(n).min(MAX_DEGREE_HINT),
        };
        Self {
            people: Vec::with_capacity(people),
            friends: Vec::with_capacity(people),
            name_index: HashMap::with_capacity(people),
            degree_hint,
        }
    }

    /// Register a person, returning their index.
    pub fn add_person(&mut self, person: Person) -> Result<PersonId, GraphError> {
        if self.name_index.contains_key(&person.name) {
            return Err(GraphError::DuplicatePerson(person.name));
        }
        let id = self.people.len();
        self.name_index.insert(person.name.clone(), id);
        self.people.push(person);
        self.friends.push(Vec::with_capacity(self.degree_hint));
        Ok(id)
    }

    /// Add an undirected friendship between two named people.
    ///
    /// Returns Ok(false) if the friendship already exists.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<bool, GraphError> {
        let ia = self
            .name_index
            .get(a)
            .copied()
            .ok_or_else(|| GraphError::UnknownPerson(a.to_string()))?;
        let ib = self
            .name_index
            .get(b)
            .copied()
            .ok_or_else(|| GraphError::UnknownPerson(b.to_string()))?;
        self.add_friendship_by_index(ia, ib)
    }

    /// Add an undirected friendship between two people by index.
    pub fn add_friendship_by_index(&mut self, a: PersonId, b: PersonId) -> Result<bool, GraphError> {
        let count = self.people.len();
        for index in [a, b] {
            if index >= count {
                return Err(GraphError::IndexOutOfRange { index, count });
            }
        }
        if a == b {
            return Err(GraphError::SelfFriendship(self.people[a].name.clone()));
        }
        if self.friends[a].contains(&b) {
            return Ok(false);
        }
        self.friends[a].push(b);
        self.friends[b].push(a);
        Ok(true)
    }

    /// Bulk load friendships from (name, name) pairs. Returns the number of
    /// friendships that were new. Stops at the first error.
    pub fn load_friendships<I, S>(&mut self, pairs: I) -> Result<usize, GraphError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (a, b) in pairs {
            if self.add_friendship(a.as_ref(), b.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of friends of the person at `index`, or 0 if out of range.
    pub fn degree(&self, index: PersonId) -> usize {
        self.friends.get(index).map_or(0, Vec::len)
    }

    /// Number of undirected friendships.
    pub fn friendship_count(&self) -> usize {
        self.friends.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn student_count(&self) -> usize {
        self.people.iter().filter(|p| p.is_student()).count()
    }

    /// Distinct schools with their student counts, sorted by school name.
    pub fn schools(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for school in self.people.iter().filter_map(Person::school) {
            *counts.entry(school).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(school, n)| (school.to_string(), n))
            .collect()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let strings: usize = self
            .people
            .iter()
            .map(|p| p.name.capacity() + p.school.as_ref().map_or(0, String::capacity))
            .sum();
        let people_mem = self.people.capacity() * size_of::<Person>() + strings;
        let adjacency: usize = self
            .friends
            .iter()
            .map(|v| size_of::<Vec<PersonId>>() + v.capacity() * size_of::<PersonId>())
            .sum();
        // HashMap entry plus a second copy of the name key
        let index_mem = self.name_index.len() * (size_of::<(String, PersonId)>() + 16)
            + self.name_index.keys().map(String::capacity).sum::<usize>();

        people_mem + adjacency + index_mem
    }
}

impl SocialGraph for Graph {
    fn person_count(&self) -> usize {
        self.people.len()
    }

    fn person_at(&self, index: PersonId) -> &Person {
        &self.people[index]
    }

    fn index_of(&self, name: &str) -> Option<PersonId> {
        self.name_index.get(name).copied()
    }

    fn neighbors_of(&self, index: PersonId) -> &[PersonId] {
        &self.friends[index]
    }
}
