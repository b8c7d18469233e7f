// src/graph/reach.rs
//! Reachability over the graph, its transpose, or both at once.
//!
//! Breadth-first search with an explicit visited set, so cycles and
//! self-loops terminate. One call is O(V + E).

use std::collections::{HashMap, HashSet, VecDeque};

use super::store::DirectedGraph;
use super::types::{Edge, NodeId};

/// Which way edges are followed during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `source -> target`.
    Forward,
    /// `target -> source`, i.e. the transpose graph.
    Reverse,
    /// Either way, i.e. the underlying undirected graph.
    Both,
}

fn adjacency<T: NodeId>(edges: &[Edge<T>], direction: Direction) -> HashMap<&T, Vec<&T>> {
    let mut neighbors: HashMap<&T, Vec<&T>> = HashMap::new();

    for edge in edges {
        if matches!(direction, Direction::Forward | Direction::Both) {
            neighbors.entry(&edge.source).or_default().push(&edge.target);
        }
        if matches!(direction, Direction::Reverse | Direction::Both) {
            neighbors.entry(&edge.target).or_default().push(&edge.source);
        }
    }

    neighbors
}

/// Nodes reachable from `start`, including `start` itself.
pub(crate) fn bfs<'a, T: NodeId>(
    edges: &'a [Edge<T>],
    start: &'a T,
    direction: Direction,
) -> HashSet<&'a T> {
    let neighbors = adjacency(edges, direction);
    let mut visited: HashSet<&T> = HashSet::new();
    let mut queue: VecDeque<&T> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(next) = neighbors.get(current) else {
            continue;
        };
        for &neighbor in next {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

impl<T: NodeId> DirectedGraph<T> {
    /// Identifiers reachable from `start` following `direction`, `start` included.
    ///
    /// Returns an empty set if `start` is not in the graph.
    #[must_use]
    pub fn reachable(&self, start: &T, direction: Direction) -> HashSet<T> {
        if !self.contains_node(start) {
            return HashSet::new();
        }
        bfs(self.edges(), start, direction)
            .into_iter()
            .cloned()
            .collect()
    }
}
