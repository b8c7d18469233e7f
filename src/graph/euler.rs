// src/graph/euler.rs
//! Eulerian circuit and trail detection.
//!
//! Both checks combine the degree balance with a connectivity check.
//! A graph with no edges has nothing to traverse and reports neither.

use super::store::DirectedGraph;
use super::types::NodeId;

impl<T: NodeId> DirectedGraph<T> {
    /// A closed walk using every edge exactly once exists.
    ///
    /// Requires at least one edge, strong connectivity over all nodes, and
    /// `in == out` everywhere.
    #[must_use]
    pub fn has_eulerian_circuit(&self) -> bool {
        self.connection_count() > 0
            && self.degree_balance().is_balanced()
            && self.is_strongly_connected()
    }

    /// An open or closed walk using every edge exactly once exists.
    ///
    /// Requires at least one edge, weak connectivity over all nodes, at most
    /// one node with `out = in + 1`, at most one with `in = out + 1`, and
    /// every other node balanced.
    #[must_use]
    pub fn has_eulerian_trail(&self) -> bool {
        self.connection_count() > 0
            && self.degree_balance().admits_trail()
            && self.is_weakly_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[i32], edges: &[(i32, i32)]) -> DirectedGraph<i32> {
        DirectedGraph::from_parts(nodes.iter().copied(), edges.iter().copied())
            .expect("valid graph")
    }

    #[test]
    fn test_eulerian_table() {
        // (nodes, edges, circuit, trail, description)
        let cases = vec![
            (vec![], vec![], false, false, "Empty graph"),
            (vec![1], vec![], false, false, "Single node, no edges"),
            (vec![1, 2], vec![], false, false, "Edgeless pair"),
            (vec![1], vec![(1, 1)], true, true, "Single self loop"),
            (vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 4), (4, 1)], true, true, "Four cycle"),
            (vec![1, 2, 3], vec![(1, 2), (2, 3)], false, true, "Path"),
            (vec![1, 2], vec![(1, 2)], false, true, "Single edge"),
            (vec![1, 2, 3], vec![(1, 2), (1, 3)], false, false, "Two ends"),
            (vec![1, 2, 3], vec![(2, 1), (3, 1)], false, false, "Two starts"),
            (vec![1, 2, 3], vec![(1, 2), (2, 1)], false, false, "Cycle plus isolated node"),
            (
                vec![1, 2, 3, 4],
                vec![(1, 2), (2, 1), (3, 4), (4, 3)],
                false,
                false,
                "Disjoint balanced cycles",
            ),
            (
                vec![1, 2, 3],
                vec![(1, 2), (2, 3), (3, 1), (1, 3), (3, 2)],
                false,
                true,
                "Cycle with detour",
            ),
            (
                vec![1, 2, 3],
                vec![(1, 2), (2, 1), (2, 3), (3, 2), (1, 1)],
                true,
                true,
                "Figure eight with loop",
            ),
        ];

        for (nodes, edges, circuit, trail, desc) in cases {
            let g = graph(&nodes, &edges);
            assert_eq!(g.has_eulerian_circuit(), circuit, "circuit: {desc}");
            assert_eq!(g.has_eulerian_trail(), trail, "trail: {desc}");
        }
    }

    #[test]
    fn test_checks_are_idempotent() {
        let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let first = (g.has_eulerian_circuit(), g.has_eulerian_trail());
        let second = (g.has_eulerian_circuit(), g.has_eulerian_trail());
        assert_eq!(first, second);
        assert_eq!(g.connection_count(), 2);
    }
}
