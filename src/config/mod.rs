pub mod types;

pub use self::types::{Config, RenderConfig, ReportConfig};

use crate::error::{GraphError, Result};
use std::fs;
use std::path::Path;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "digraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `digraph.toml` from the working directory, falling back to
    /// defaults when it is missing or malformed.
    #[must_use]
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::new();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = CONFIG_FILE, error = %e, "ignoring config file");
                Self::new()
            }
        }
    }

    /// Loads a config file from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// Parses config from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML for this schema.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
