// src/report/mod.rs
//! One-shot analysis summary of a graph.

pub mod console;

use serde::Serialize;

use crate::graph::{Connectivity, DirectedGraph, NodeId};

pub use console::print_report;

/// Degree counters of a single node, stringified for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDegree {
    pub id: String,
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Every structural query answered for one graph snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub node_count: usize,
    pub connection_count: usize,
    pub degree: usize,
    pub connectivity: Connectivity,
    pub strongly_connected: bool,
    pub weakly_connected: bool,
    pub connected: bool,
    pub eulerian_circuit: bool,
    pub eulerian_trail: bool,
    /// Where an open Eulerian trail must begin, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_start: Option<String>,
    /// Where an open Eulerian trail must end, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_end: Option<String>,
    pub nodes: Vec<NodeDegree>,
}

impl GraphReport {
    #[must_use]
    pub fn from_graph<T: NodeId>(graph: &DirectedGraph<T>) -> Self {
        let eulerian_trail = graph.has_eulerian_trail();
        let balance = graph.degree_balance();
        let (trail_start, trail_end) = if eulerian_trail {
            (
                balance.starts.first().map(ToString::to_string),
                balance.ends.first().map(ToString::to_string),
            )
        } else {
            (None, None)
        };

        let nodes = graph
            .nodes()
            .iter()
            .map(|n| NodeDegree {
                id: n.id().to_string(),
                in_degree: n.in_degree(),
                out_degree: n.out_degree(),
            })
            .collect();

        Self {
            node_count: graph.node_count(),
            connection_count: graph.connection_count(),
            degree: graph.degree(),
            connectivity: graph.connectiveness_type(),
            strongly_connected: graph.is_strongly_connected(),
            weakly_connected: graph.is_weakly_connected(),
            connected: graph.is_connected(),
            eulerian_circuit: graph.has_eulerian_circuit(),
            eulerian_trail,
            trail_start,
            trail_end,
            nodes,
        }
    }

    /// Pretty-printed JSON form.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
