// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A node identifier referenced by an operation is not in the graph.
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl GraphError {
    pub(crate) fn not_found(id: &impl std::fmt::Display) -> Self {
        GraphError::NodeNotFound { id: id.to_string() }
    }

    /// True for errors caused by the graph description rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. }
                | GraphError::Parse { .. }
                | GraphError::Toml(_)
                | GraphError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

// Allow `?` on std::io::Error by converting to GraphError::Io with unknown path.
impl From<std::io::Error> for GraphError {
    fn from(source: std::io::Error) -> Self {
        GraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
