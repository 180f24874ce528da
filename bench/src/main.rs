use friend_graph_core::{Graph, Person};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let people: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: friend-graph-bench [mode] [people]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       One long path of people (deepest possible DFS)");
        println!("  barbell     Two dense cliques connected by a thin bridge");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!();
        println!("Default people: 1000000");
        return;
    }

    if people < 2 {
        eprintln!("people must be at least 2");
        return;
    }

    println!("friend-graph-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "all" => vec![
            ("Chain", gen_chain as fn(usize) -> Graph),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("Small-world (Watts-Strogatz)", gen_small_world),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, people);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, people: usize) {
    println!("--- {} ---", name);
    println!("Target: {} people", people);

    let t = Instant::now();
    let graph = generator(people);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} people, {} friendships, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.people().len(),
        graph.friendship_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );
    println!();

    // Shortest chain: first person to last person
    let first = graph.people()[0].name();
    let last = graph.people()[graph.people().len() - 1].name();
    let t = Instant::now();
    let chain = friend_graph_core::shortest_chain(&graph, first, last);
    let elapsed = t.elapsed();
    match chain {
        Some(c) => println!(
            "{:<12} {} → {}: {} hops in {:.1}ms",
            "chain",
            first,
            last,
            c.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "{:<12} {} → {}: no chain ({:.1}ms)",
            "chain",
            first,
            last,
            elapsed.as_secs_f64() * 1000.0
        ),
    }

    let t = Instant::now();
    let groups = friend_graph_core::find_groups(&graph, SCHOOLS[0]).unwrap_or_default();
    let elapsed = t.elapsed();
    let largest = groups.iter().map(Vec::len).max().unwrap_or(0);
    println!(
        "{:<12} {}: {} cliques, largest {} in {:.1}ms",
        "cliques",
        SCHOOLS[0],
        groups.len(),
        largest,
        elapsed.as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let connectors = friend_graph_core::find_connectors(&graph).unwrap_or_default();
    let elapsed = t.elapsed();
    println!(
        "{:<12} {} found in {:.1}ms",
        "connectors",
        connectors.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(people + friendships), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

const SCHOOLS: [&str; 4] = ["rutgers", "raritan", "cornell", "penn state"];

/// A random person: 70% students spread over SCHOOLS, the rest non-students.
fn random_person(rng: &mut FastRng, i: usize) -> Person {
    let name = format!("p{}", i);
    if rng.next(10) < 7 {
        Person::student(name, SCHOOLS[rng.next(SCHOOLS.len() as u64) as usize])
    } else {
        Person::non_student(name)
    }
}

fn add_people(graph: &mut Graph, rng: &mut FastRng, people: usize) {
    for i in 0..people {
        graph
            .add_person(random_person(rng, i))
            .expect("generated names are unique");
    }
}

/// One long path: p0 - p1 - ... - pn. Every interior person is a connector,
/// and both DFS-based queries reach maximum depth.
fn gen_chain(people: usize) -> Graph {
    let mut graph = Graph::with_capacity(people, people);
    let mut rng = FastRng::new(42);
    add_people(&mut graph, &mut rng, people);
    for i in 1..people {
        graph
            .add_friendship_by_index(i - 1, i)
            .expect("chain link between distinct people");
    }
    graph
}

/// Barbell: two dense cliques connected by a single thin bridge.
///
/// Each clique has ~n/2 people with ~20 random friends each; they're joined
/// by a chain of 10 bridge people, all of whom are connectors.
fn gen_barbell(people: usize) -> Graph {
    let bridge_len = 10usize.min(people.saturating_sub(2));
    let clique_size = (people - bridge_len) / 2;
    let mut graph = Graph::with_capacity(people, clique_size * 40 + bridge_len);
    let mut rng = FastRng::new(99999);
    add_people(&mut graph, &mut rng, clique_size * 2 + bridge_len);

    let b_start = clique_size + bridge_len;
    for offset in [0, b_start] {
        for i in 0..clique_size {
            for _ in 0..20usize.min(clique_size.saturating_sub(1)) {
                let target = rng.next(clique_size as u64) as usize;
                if target != i {
                    graph
                        .add_friendship_by_index(offset + i, offset + target)
                        .expect("clique friendship within range");
                }
            }
        }
    }

    // Bridge: last person of A → bridge chain → first person of B
    let mut prev = clique_size.saturating_sub(1);
    for id in clique_size..b_start {
        graph
            .add_friendship_by_index(prev, id)
            .expect("bridge link within range");
        prev = id;
    }
    if prev != b_start {
        graph
            .add_friendship_by_index(prev, b_start)
            .expect("bridge end within range");
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each person is friends with K neighbors on each side of a ring, with each
/// friendship rewired to a random person with probability p.
fn gen_small_world(people: usize) -> Graph {
    let k = 5usize;
    let p = 0.05f64;
    let mut graph = Graph::with_capacity(people, people * k);
    let mut rng = FastRng::new(67890);
    add_people(&mut graph, &mut rng, people);

    for i in 0..people {
        for j in 1..=k {
            let neighbor = if rng.next_f64() < p {
                rng.next(people as u64) as usize
            } else {
                (i + j) % people
            };
            // Self-friendships are rejected; skip them
            if neighbor != i {
                graph
                    .add_friendship_by_index(i, neighbor)
                    .expect("ring friendship within range");
            }
        }
    }

    graph
}
