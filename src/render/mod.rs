// src/render/mod.rs
//! Diagram output. Consumes `nodes()` / `connections()` snapshots only.

pub mod layout;
pub mod svg;

use crate::config::RenderConfig;
use crate::graph::{DirectedGraph, NodeId};

/// Renders the graph as an SVG document using a circular layout.
#[must_use]
pub fn render_svg<T: NodeId>(graph: &DirectedGraph<T>, config: &RenderConfig) -> String {
    svg::render(&graph.nodes(), &graph.connections(), config)
}
