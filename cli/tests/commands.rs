//! End-to-end command tests: write a friendship file, load it through the
//! configured settings, and check rendered output.

use std::io::Write;

use friend_graph_cli::config::{OutputFormat, Settings};
use friend_graph_cli::state::GraphState;
use friend_graph_cli::{cliques, connectors, path, status, Error};
use serde_json::Value;
use tempfile::NamedTempFile;

const FRIENDS: &str = "\
9
sam|y|rutgers
jane|y|rutgers
michele|y|cornell
sergei|y|rutgers
ricardo|y|rutgers
kaitlin|y|rutgers
samir|n
aparna|y|rutgers
bob|n
sam|jane
jane|bob
jane|kaitlin
kaitlin|samir
sergei|aparna
samir|aparna
aparna|ricardo
michele|bob
";

fn graph_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(text.as_bytes()).expect("failed to write graph");
    file
}

fn load(file: &NamedTempFile) -> GraphState {
    let settings = Settings {
        graph: Some(file.path().to_path_buf()),
        ..Settings::default()
    };
    GraphState::load(&settings).expect("failed to load graph")
}

fn json(run: impl FnOnce(&mut Vec<u8>) -> friend_graph_cli::Result<()>) -> Value {
    let mut out = Vec::new();
    run(&mut out).expect("command failed");
    serde_json::from_slice(&out).expect("output is not JSON")
}

#[test]
fn chain_through_non_student() {
    let file = graph_file(FRIENDS);
    let gs = load(&file);
    let v = json(|out| path::run(&gs, "sam", "aparna", OutputFormat::Json, out));
    assert_eq!(
        v["chain"],
        serde_json::json!(["sam", "jane", "kaitlin", "samir", "aparna"])
    );
}

#[test]
fn chain_unconnected_is_null() {
    let file = graph_file("3\na|n\nb|n\nc|n\na|b\n");
    let gs = load(&file);
    let v = json(|out| path::run(&gs, "a", "c", OutputFormat::Json, out));
    assert!(v["chain"].is_null());
}

#[test]
fn chain_unknown_person_is_error() {
    let file = graph_file(FRIENDS);
    let gs = load(&file);
    let mut out = Vec::new();
    let err = path::run(&gs, "sam", "nobody", OutputFormat::Text, &mut out).unwrap_err();
    assert!(matches!(err, Error::UnknownPerson(name) if name == "nobody"));
}

#[test]
fn rutgers_cliques() {
    let file = graph_file(FRIENDS);
    let gs = load(&file);
    let report = cliques::cliques(&gs, "Rutgers");
    let mut groups: Vec<Vec<String>> = report
        .cliques
        .into_iter()
        .map(|mut g| {
            g.sort();
            g
        })
        .collect();
    groups.sort();
    // Everyone at rutgers is connected through samir (non-student)
    assert_eq!(
        groups,
        vec![vec!["aparna", "jane", "kaitlin", "ricardo", "sam", "sergei"]]
    );
}

#[test]
fn cliques_unknown_school_text() {
    let file = graph_file(FRIENDS);
    let gs = load(&file);
    let mut out = Vec::new();
    cliques::run(&gs, "mit", OutputFormat::Text, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "no students attend mit\n");
}

#[test]
fn connectors_json() {
    let file = graph_file(FRIENDS);
    let gs = load(&file);
    let v = json(|out| connectors::run(&gs, OutputFormat::Json, out));
    let mut names: Vec<&str> = v["connectors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["aparna", "bob", "jane", "kaitlin", "samir"]
    );
}

#[test]
fn status_counts() {
    let file = graph_file(FRIENDS);
    let gs = load(&file);
    let v = json(|out| status::run(&gs, OutputFormat::Json, out));
    assert_eq!(v["people"], 9);
    assert_eq!(v["friendships"], 8);
    assert_eq!(v["students"], 7);
    assert_eq!(v["schools"][0]["school"], "cornell");
    assert_eq!(v["schools"][1]["students"], 6);
}

#[test]
fn max_people_rejects_large_graph() {
    let file = graph_file(FRIENDS);
    let settings = Settings {
        graph: Some(file.path().to_path_buf()),
        max_people: 5,
        ..Settings::default()
    };
    let err = GraphState::load(&settings).err().expect("load should fail");
    assert!(matches!(err, Error::TooLarge { people: 9, max: 5 }));
}
