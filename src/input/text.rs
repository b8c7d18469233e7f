// src/input/text.rs
//! Plain-text edge list.
//!
//! ```text
//! # comments run to end of line
//! a -> b      declares the edge and both endpoints
//! c           declares a node with no edges
//! ```

use regex::Regex;

use crate::error::{GraphError, Result};
use crate::graph::DirectedGraph;

const ARROW: &str = "->";

/// Parses an edge list into a graph. Nodes keep first-mention order.
///
/// # Errors
/// Returns `Parse` with the 1-based line number of the first bad line.
pub fn parse(content: &str) -> Result<DirectedGraph<String>> {
    let edge_re = Regex::new(r"^(\S+?)\s*->\s*(\S+)$")?;
    let node_re = Regex::new(r"^\S+$")?;

    let mut graph = DirectedGraph::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = edge_re.captures(line) {
            let source = &caps[1];
            let target = &caps[2];
            if source.contains(ARROW) || target.contains(ARROW) {
                return Err(parse_error(idx, "chained arrows are not supported"));
            }
            graph.add_node(source.to_string());
            graph.add_node(target.to_string());
            graph.add_connection(source.to_string(), target.to_string())?;
        } else if node_re.is_match(line) && !line.contains(ARROW) {
            graph.add_node(line.to_string());
        } else {
            return Err(parse_error(
                idx,
                &format!("expected `source -> target` or a single node id, got `{line}`"),
            ));
        }
    }

    Ok(graph)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

fn parse_error(idx: usize, message: &str) -> GraphError {
    GraphError::Parse {
        line: idx + 1,
        message: message.to_string(),
    }
}
