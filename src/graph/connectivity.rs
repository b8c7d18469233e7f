// src/graph/connectivity.rs
//! Strong / weak / none classification.

use serde::Serialize;
use std::fmt;

use super::reach::{bfs, Direction};
use super::store::DirectedGraph;
use super::types::NodeId;

/// How well connected a graph is. Strong implies weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    Strong,
    Weak,
    None,
}

impl Connectivity {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
            Self::None => "none",
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T: NodeId> DirectedGraph<T> {
    /// True if a traversal from the anchor node covers every node.
    /// Graphs with no nodes are covered vacuously.
    fn covered_from_anchor(&self, direction: Direction) -> bool {
        let Some(anchor) = self.anchor() else {
            return true;
        };
        bfs(self.edges(), anchor, direction).len() == self.node_count()
    }

    /// Every node reaches every other node following edge direction.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.covered_from_anchor(Direction::Forward) && self.covered_from_anchor(Direction::Reverse)
    }

    /// Every node reaches every other node when edge direction is ignored.
    #[must_use]
    pub fn is_weakly_connected(&self) -> bool {
        self.covered_from_anchor(Direction::Both)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.is_strongly_connected() || self.is_weakly_connected()
    }

    #[must_use]
    pub fn connectiveness_type(&self) -> Connectivity {
        if self.is_strongly_connected() {
            Connectivity::Strong
        } else if self.is_weakly_connected() {
            Connectivity::Weak
        } else {
            Connectivity::None
        }
    }
}
