// tests/unit_input.rs
use digraph_core::error::GraphError;
use digraph_core::input;
use std::fs;

#[test]
fn test_load_each_format() {
    let d = tempfile::tempdir().unwrap();
    let toml = d.path().join("g.toml");
    let json = d.path().join("g.json");
    let text = d.path().join("g.txt");
    fs::write(&toml, "nodes = [1, 2, 3]\nconnections = [[1, 2], [2, 3]]\n").unwrap();
    fs::write(&json, r#"{"nodes": [1, 2, 3], "connections": [[1, 2], [2, 3]]}"#).unwrap();
    fs::write(&text, "# path\n1 -> 2\n2 -> 3\n").unwrap();

    for path in [&toml, &json, &text] {
        let g = input::load(path).unwrap();
        assert_eq!(g.node_count(), 3, "{}", path.display());
        assert_eq!(g.connection_count(), 2, "{}", path.display());
        assert!(g.has_eulerian_trail());
    }
}

#[test]
fn test_missing_file_reports_path() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("nope.txt");
    match input::load(&path) {
        Err(GraphError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_text_parse_error_is_invalid_input() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("bad.txt");
    fs::write(&path, "a -> b\na -> b -> c\n").unwrap();
    let err = input::load(&path).unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    assert!(err.is_invalid_input());
}
