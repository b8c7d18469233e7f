// src/input/mod.rs
//! Graph description loading.
//!
//! Three formats are accepted, chosen by file extension:
//! - `.toml`: `nodes = [...]` and `connections = [[a, b], ...]`
//! - `.json`: `{"nodes": [...], "connections": [[a, b], ...]}`
//! - anything else: the line-oriented edge list handled by [`text`].
//!
//! Identifiers become `String`s; TOML and JSON accept integers or strings.

pub mod text;

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::DirectedGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Text,
}

impl Format {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Serialized graph description shared by the TOML and JSON formats.
#[derive(Debug, Clone, Default, Deserialize)]
struct GraphSpec {
    #[serde(default)]
    nodes: Vec<RawId>,
    #[serde(default)]
    connections: Vec<(RawId, RawId)>,
}

impl GraphSpec {
    fn build(self) -> Result<DirectedGraph<String>> {
        DirectedGraph::from_parts(
            self.nodes.iter().map(ToString::to_string),
            self.connections
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string())),
        )
    }
}

/// Reads and parses a graph description file.
///
/// # Errors
/// Returns `Io` if the file cannot be read, a format error if it cannot be
/// parsed, or `NodeNotFound` if a connection names an undeclared node.
pub fn load(path: &Path) -> Result<DirectedGraph<String>> {
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let format = Format::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading graph");
    parse(&content, format)
}

/// Parses a graph description already in memory.
///
/// # Errors
/// Returns a format error or `NodeNotFound` as for [`load`].
pub fn parse(content: &str, format: Format) -> Result<DirectedGraph<String>> {
    match format {
        Format::Toml => toml::from_str::<GraphSpec>(content)?.build(),
        Format::Json => serde_json::from_str::<GraphSpec>(content)?.build(),
        Format::Text => text::parse(content),
    }
}
