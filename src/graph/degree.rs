// src/graph/degree.rs
//! In/out degree bookkeeping.
//!
//! The store keeps live counters on every node; `tally` recomputes the same
//! numbers from scratch by scanning the edge list, and `balance` classifies
//! nodes by how far their counters diverge.

use serde::Serialize;
use std::collections::HashMap;

use super::store::DirectedGraph;
use super::types::{Edge, Node, NodeId};

/// In/out degree pair recomputed from edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeCount {
    pub incoming: usize,
    pub outgoing: usize,
}

/// Counts in/out degree for every endpoint that appears in `edges`.
///
/// Nodes with no edges are absent from the result.
pub fn tally<'a, T, I>(edges: I) -> HashMap<T, DegreeCount>
where
    T: NodeId + 'a,
    I: IntoIterator<Item = &'a Edge<T>>,
{
    let mut counts: HashMap<T, DegreeCount> = HashMap::new();

    for edge in edges {
        counts.entry(edge.source.clone()).or_default().outgoing += 1;
        counts.entry(edge.target.clone()).or_default().incoming += 1;
    }

    counts
}

/// Nodes grouped by their out-minus-in difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeBalance<T> {
    /// Nodes with `out = in + 1`.
    pub starts: Vec<T>,
    /// Nodes with `in = out + 1`.
    pub ends: Vec<T>,
    /// Nodes whose difference is 2 or more in either direction.
    pub unbalanced: Vec<T>,
}

impl<T> Default for DegreeBalance<T> {
    fn default() -> Self {
        Self {
            starts: Vec::new(),
            ends: Vec::new(),
            unbalanced: Vec::new(),
        }
    }
}

impl<T> DegreeBalance<T> {
    /// Every node has `in == out`.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.starts.is_empty() && self.ends.is_empty() && self.unbalanced.is_empty()
    }

    /// At most one start, at most one end, everything else balanced.
    #[must_use]
    pub fn admits_trail(&self) -> bool {
        self.starts.len() <= 1 && self.ends.len() <= 1 && self.unbalanced.is_empty()
    }
}

/// Classifies nodes by their degree difference, preserving iteration order.
pub fn balance<'a, T, I>(nodes: I) -> DegreeBalance<T>
where
    T: NodeId + 'a,
    I: IntoIterator<Item = &'a Node<T>>,
{
    let mut result = DegreeBalance::default();

    for node in nodes {
        match node.imbalance() {
            0 => {}
            1 => result.starts.push(node.id().clone()),
            -1 => result.ends.push(node.id().clone()),
            _ => result.unbalanced.push(node.id().clone()),
        }
    }

    result
}

impl<T: NodeId> DirectedGraph<T> {
    /// Degree classification of every node, in insertion order.
    #[must_use]
    pub fn degree_balance(&self) -> DegreeBalance<T> {
        balance(self.iter_nodes())
    }

    /// True if the live counters match a fresh scan of the edge list.
    #[must_use]
    pub fn degrees_consistent(&self) -> bool {
        let counts = tally(self.edges());
        self.iter_nodes().all(|node| {
            let expected = counts.get(node.id()).copied().unwrap_or_default();
            node.in_degree() == expected.incoming && node.out_degree() == expected.outgoing
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_self_loop_once_each_way() {
        let edges = vec![Edge::new(1, 2), Edge::new(2, 2), Edge::new(3, 2)];
        let counts = tally(&edges);

        let two = counts.get(&2).copied().unwrap_or_default();
        assert_eq!(two.incoming, 3);
        assert_eq!(two.outgoing, 1);

        let one = counts.get(&1).copied().unwrap_or_default();
        assert_eq!(one, DegreeCount { incoming: 0, outgoing: 1 });
        assert!(!counts.contains_key(&4));
    }

    #[test]
    fn test_balance_classification() {
        let graph = DirectedGraph::from_parts(
            [1, 2, 3, 4, 5],
            [(1, 2), (3, 4), (3, 5)],
        )
        .expect("valid graph");

        let result = graph.degree_balance();
        assert_eq!(result.starts, vec![1]);
        assert_eq!(result.ends, vec![2, 4, 5]);
        assert_eq!(result.unbalanced, vec![3]);
        assert!(!result.is_balanced());
        assert!(!result.admits_trail());
    }

    #[test]
    fn test_empty_graph_is_balanced() {
        let graph: DirectedGraph<u8> = DirectedGraph::new();
        let result = graph.degree_balance();
        assert!(result.is_balanced());
        assert!(result.admits_trail());
        assert!(graph.degrees_consistent());
    }
}
