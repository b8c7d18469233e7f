// src/render/svg.rs
//! SVG writer: white circles, bold labels, curved black arrows.

use std::collections::HashMap;
use std::fmt::Write;

use super::layout::{circular, Point};
use crate::config::RenderConfig;
use crate::graph::{Edge, Node, NodeId};

const TITLE_BAND: f64 = 60.0;
const STROKE: f64 = 2.0;
/// Self-loop control points sit this many radii out from the node center.
const LOOP_REACH: f64 = 3.2;
const LOOP_SPREAD: f64 = 0.5;

/// Renders node and edge snapshots to a standalone SVG document.
#[must_use]
pub fn render<T: NodeId>(nodes: &[Node<T>], edges: &[Edge<T>], config: &RenderConfig) -> String {
    let center = Point::new(config.width / 2.0, (config.height + TITLE_BAND) / 2.0);
    let radius = ((config.width.min(config.height - TITLE_BAND) / 2.0) - config.node_radius * 2.0)
        .max(0.0);
    let points = circular(nodes.len(), center, radius);
    let positions: HashMap<&T, Point> = nodes.iter().map(Node::id).zip(points).collect();

    let mut out = String::new();
    write_header(&mut out, config);

    for edge in edges {
        let (Some(&from), Some(&to)) = (positions.get(&edge.source), positions.get(&edge.target))
        else {
            continue;
        };
        let path = if edge.is_self_loop() {
            loop_path(from, center, config.node_radius)
        } else {
            arc_path(from, to, config)
        };
        let _ = writeln!(
            out,
            r#"  <path class="edge" d="{path}" fill="none" stroke="black" stroke-width="{STROKE}" marker-end="url(#arrow)"/>"#
        );
    }

    for node in nodes {
        let Some(p) = positions.get(node.id()) else {
            continue;
        };
        let _ = writeln!(
            out,
            r#"  <circle class="node" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="white" stroke="black" stroke-width="{STROKE}"/>"#,
            p.x, p.y, config.node_radius
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{:.1}" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            p.x,
            p.y,
            config.font_size,
            escape(&node.id().to_string())
        );
    }

    out.push_str("</svg>\n");
    out
}

fn write_header(out: &mut String, config: &RenderConfig) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="sans-serif">"#,
        w = config.width,
        h = config.height
    );
    out.push_str(
        "  <defs>\n    <marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" \
         markerWidth=\"7\" markerHeight=\"7\" orient=\"auto-start-reverse\">\n      \
         <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"black\"/>\n    </marker>\n  </defs>\n",
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="white"/>"#
    );
    if !config.title.is_empty() {
        let _ = writeln!(
            out,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{:.1}" font-weight="bold" text-anchor="middle">{}</text>"#,
            config.width / 2.0,
            TITLE_BAND / 2.0 + 6.0,
            config.font_size * 1.2,
            escape(&config.title)
        );
    }
}

/// Quadratic curve bent to the right of travel, trimmed to the node borders.
fn arc_path(from: Point, to: Point, config: &RenderConfig) -> String {
    let mid = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let control = Point::new(
        mid.x + config.curvature * dy,
        mid.y - config.curvature * dx,
    );

    let start = from.step_toward(control, config.node_radius);
    let end = to.step_toward(control, config.node_radius + STROKE);
    format!(
        "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
        start.x, start.y, control.x, control.y, end.x, end.y
    )
}

/// Cubic loop drawn on the side of the node facing away from the layout center.
fn loop_path(at: Point, center: Point, node_radius: f64) -> String {
    let outward = if at.distance(center) == 0.0 {
        (0.0, -1.0)
    } else {
        let d = at.distance(center);
        ((at.x - center.x) / d, (at.y - center.y) / d)
    };
    let rotate = |angle: f64| {
        let (s, c) = angle.sin_cos();
        (outward.0 * c - outward.1 * s, outward.0 * s + outward.1 * c)
    };
    let left = rotate(LOOP_SPREAD);
    let right = rotate(-LOOP_SPREAD);
    let offset = |dir: (f64, f64), len: f64| Point::new(at.x + dir.0 * len, at.y + dir.1 * len);

    let start = offset(left, node_radius);
    let c1 = offset(left, node_radius * LOOP_REACH);
    let c2 = offset(right, node_radius * LOOP_REACH);
    let end = offset(right, node_radius + STROKE);
    format!(
        "M {:.2} {:.2} C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
        start.x, start.y, c1.x, c1.y, c2.x, c2.y, end.x, end.y
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
