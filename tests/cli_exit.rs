// tests/cli_exit.rs - Exit code and output tests for the binary
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_digraph"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute digraph")
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn test_analyze_json() {
    let d = tempfile::tempdir().unwrap();
    write(&d, "cycle.txt", "1 -> 2\n2 -> 3\n3 -> 4\n4 -> 1\n");

    let out = run(&d, &["analyze", "cycle.txt", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is not valid JSON");
    assert_eq!(report["connectivity"], "strong");
    assert_eq!(report["eulerian_circuit"], true);
    assert_eq!(report["degree"], 8);
}

#[test]
fn test_exit_2_on_unknown_node() {
    let d = tempfile::tempdir().unwrap();
    write(&d, "g.toml", "nodes = [1]\nconnections = [[1, 2]]\n");

    let out = run(&d, &["analyze", "g.toml"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("node not found: 2"));
}

#[test]
fn test_exit_1_on_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let out = run(&d, &["analyze", "absent.txt"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_render_to_stdout() {
    let d = tempfile::tempdir().unwrap();
    write(&d, "g.json", r#"{"nodes": ["a", "b"], "connections": [["a", "b"]]}"#);

    let out = run(&d, &["render", "g.json", "--title", "Pair"]);
    assert_eq!(out.status.code(), Some(0));

    let svg = String::from_utf8_lossy(&out.stdout);
    assert!(svg.contains("Pair"));
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn test_render_uses_config_file() {
    let d = tempfile::tempdir().unwrap();
    write(&d, "g.txt", "x -> y\n");
    write(&d, "digraph.toml", "[render]\ntitle = \"From Config\"\n");

    let out = run(&d, &["render", "g.txt", "-o", "out.svg"]);
    assert_eq!(out.status.code(), Some(0));
    let svg = fs::read_to_string(d.path().join("out.svg")).unwrap();
    assert!(svg.contains("From Config"));
}
