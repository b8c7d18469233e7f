// src/graph/types.rs
//! Core records owned by the graph store.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Bound for anything usable as a node identifier.
///
/// Identifiers are opaque: the graph only compares, hashes and prints them.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// A vertex and its degree counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<T> {
    id: T,
    /// Edges ending at this node.
    in_degree: usize,
    /// Edges starting at this node.
    out_degree: usize,
}

impl<T> Node<T> {
    #[must_use]
    pub fn new(id: T) -> Self {
        Self {
            id,
            in_degree: 0,
            out_degree: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> &T {
        &self.id
    }

    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Total edge endpoints touching this node. A self-loop counts twice.
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.in_degree + self.out_degree
    }

    /// Signed out-minus-in difference.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn imbalance(&self) -> isize {
        self.out_degree as isize - self.in_degree as isize
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.in_degree == self.out_degree
    }

    pub(crate) fn set_id(&mut self, id: T) {
        self.id = id;
    }

    pub(crate) fn record_outgoing(&mut self) {
        self.out_degree += 1;
    }

    pub(crate) fn record_incoming(&mut self) {
        self.in_degree += 1;
    }

    pub(crate) fn release_outgoing(&mut self) {
        self.out_degree = self.out_degree.saturating_sub(1);
    }

    pub(crate) fn release_incoming(&mut self) {
        self.in_degree = self.in_degree.saturating_sub(1);
    }
}

/// A directed edge. Identity is the ordered pair itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<T> {
    pub source: T,
    pub target: T,
}

impl<T: PartialEq> Edge<T> {
    #[must_use]
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// True if `id` is either endpoint.
    #[must_use]
    pub fn touches(&self, id: &T) -> bool {
        self.source == *id || self.target == *id
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_counters() {
        let mut node = Node::new(7);
        node.record_outgoing();
        node.record_outgoing();
        node.record_incoming();

        assert_eq!(node.out_degree(), 2);
        assert_eq!(node.in_degree(), 1);
        assert_eq!(node.connection_count(), 3);
        assert_eq!(node.imbalance(), 1);
        assert!(!node.is_balanced());

        node.release_outgoing();
        assert!(node.is_balanced());
    }

    #[test]
    fn test_release_never_underflows() {
        let mut node = Node::new("a");
        node.release_incoming();
        node.release_outgoing();
        assert_eq!(node.connection_count(), 0);
    }

    #[test]
    fn test_edge_helpers() {
        let edge = Edge::new(1, 2);
        assert!(edge.touches(&1));
        assert!(edge.touches(&2));
        assert!(!edge.touches(&3));
        assert!(!edge.is_self_loop());
        assert!(Edge::new(4, 4).is_self_loop());
        assert_eq!(edge.to_string(), "1 -> 2");
    }
}
