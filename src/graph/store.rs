// src/graph/store.rs
//! The node/edge container and its mutation API.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::{Edge, Node, NodeId};
use crate::error::{GraphError, Result};

/// A directed graph with at most one edge per ordered pair of nodes.
///
/// Nodes and edges keep their insertion order so iteration is deterministic.
#[derive(Debug, Clone)]
pub struct DirectedGraph<T: NodeId> {
    order: Vec<T>,
    nodes: HashMap<T, Node<T>>,
    edges: Vec<Edge<T>>,
    edge_index: HashSet<Edge<T>>,
}

impl<T: NodeId> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            nodes: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashSet::new(),
        }
    }
}

impl<T: NodeId> DirectedGraph<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by applying `add_node` to every node and then
    /// `add_connection` to every pair.
    ///
    /// Duplicate nodes and duplicate pairs are dropped silently.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if a pair references an undeclared node.
    pub fn from_parts<N, C>(nodes: N, connections: C) -> Result<Self>
    where
        N: IntoIterator<Item = T>,
        C: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new();
        for id in nodes {
            graph.add_node(id);
        }
        for (source, target) in connections {
            graph.add_connection(source, target)?;
        }
        Ok(graph)
    }

    /// Inserts a node with zero degree. Returns false if `id` already exists.
    pub fn add_node(&mut self, id: T) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        debug!(node = %id, "node added");
        self.order.push(id.clone());
        self.nodes.insert(id.clone(), Node::new(id));
        true
    }

    /// Removes a node and every edge incident to it.
    /// Returns false if `id` is not in the graph.
    pub fn remove_node(&mut self, id: &T) -> bool {
        if self.nodes.remove(id).is_none() {
            return false;
        }
        self.order.retain(|n| n != id);

        let (incident, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.edges)
            .into_iter()
            .partition(|e| e.touches(id));
        self.edges = kept;

        for edge in &incident {
            self.edge_index.remove(edge);
            if edge.source != *id {
                if let Some(node) = self.nodes.get_mut(&edge.source) {
                    node.release_outgoing();
                }
            }
            if edge.target != *id {
                if let Some(node) = self.nodes.get_mut(&edge.target) {
                    node.release_incoming();
                }
            }
        }

        debug!(node = %id, dropped_edges = incident.len(), "node removed");
        true
    }

    /// Inserts the edge `source -> target`.
    ///
    /// Returns `Ok(false)` if the edge already exists.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if either endpoint is missing. The graph is left untouched.
    pub fn add_connection(&mut self, source: T, target: T) -> Result<bool> {
        self.require(&source)?;
        self.require(&target)?;

        let edge = Edge::new(source, target);
        if self.edge_index.contains(&edge) {
            return Ok(false);
        }

        if let Some(node) = self.nodes.get_mut(&edge.source) {
            node.record_outgoing();
        }
        if let Some(node) = self.nodes.get_mut(&edge.target) {
            node.record_incoming();
        }

        debug!(edge = %edge, "connection added");
        self.edge_index.insert(edge.clone());
        self.edges.push(edge);
        Ok(true)
    }

    /// Removes the edge `source -> target`.
    ///
    /// Returns `Ok(false)` if both nodes exist but the edge does not.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if either endpoint is missing.
    pub fn remove_connection(&mut self, source: &T, target: &T) -> Result<bool> {
        self.require(source)?;
        self.require(target)?;

        let edge = Edge::new(source.clone(), target.clone());
        if !self.edge_index.remove(&edge) {
            return Ok(false);
        }
        self.edges.retain(|e| *e != edge);

        if let Some(node) = self.nodes.get_mut(source) {
            node.release_outgoing();
        }
        if let Some(node) = self.nodes.get_mut(target) {
            node.release_incoming();
        }

        debug!(edge = %edge, "connection removed");
        Ok(true)
    }

    /// Re-keys `old` as `new`, keeping its position and rewriting incident edges.
    ///
    /// Returns `Ok(false)` if `new` is already taken by another node.
    ///
    /// # Errors
    /// Returns `NodeNotFound` if `old` is missing.
    pub fn rename_node(&mut self, old: &T, new: T) -> Result<bool> {
        self.require(old)?;
        if *old == new {
            return Ok(true);
        }
        if self.nodes.contains_key(&new) {
            return Ok(false);
        }

        if let Some(mut node) = self.nodes.remove(old) {
            node.set_id(new.clone());
            self.nodes.insert(new.clone(), node);
        }
        if let Some(slot) = self.order.iter_mut().find(|n| **n == *old) {
            *slot = new.clone();
        }
        for edge in &mut self.edges {
            if edge.source == *old {
                edge.source = new.clone();
            }
            if edge.target == *old {
                edge.target = new.clone();
            }
        }
        self.edge_index = self.edges.iter().cloned().collect();

        debug!(from = %old, to = %new, "node renamed");
        Ok(true)
    }

    /// Snapshot of all nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node<T>> {
        self.iter_nodes().cloned().collect()
    }

    /// Snapshot of all edges in insertion order.
    #[must_use]
    pub fn connections(&self) -> Vec<Edge<T>> {
        self.edges.clone()
    }

    #[must_use]
    pub fn node(&self, id: &T) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn contains_node(&self, id: &T) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn contains_connection(&self, source: &T, target: &T) -> bool {
        self.edge_index
            .contains(&Edge::new(source.clone(), target.clone()))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of every node's connection count, i.e. `2 * |E|`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.nodes.values().map(Node::connection_count).sum()
    }

    pub(crate) fn iter_nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub(crate) fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// First node in insertion order. Used as the traversal anchor.
    pub(crate) fn anchor(&self) -> Option<&T> {
        self.order.first()
    }

    fn require(&self, id: &T) -> Result<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::not_found(id))
        }
    }
}
