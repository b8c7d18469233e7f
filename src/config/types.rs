use serde::{Deserialize, Serialize};

/// Top-level `digraph.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Diagram geometry and styling for the SVG renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_canvas")]
    pub width: f64,
    #[serde(default = "default_canvas")]
    pub height: f64,
    #[serde(default = "default_node_radius")]
    pub node_radius: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Bend of each arrow as a fraction of its length. 0 draws straight lines.
    #[serde(default = "default_curvature")]
    pub curvature: f64,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_canvas(),
            height: default_canvas(),
            node_radius: default_node_radius(),
            font_size: default_font_size(),
            curvature: default_curvature(),
            title: default_title(),
        }
    }
}

fn default_canvas() -> f64 {
    960.0
}

fn default_node_radius() -> f64 {
    28.0
}

fn default_font_size() -> f64 {
    18.0
}

fn default_curvature() -> f64 {
    0.18
}

fn default_title() -> String {
    "Directed Graph".to_string()
}

/// Console report preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// List per-node degrees under the summary.
    #[serde(default)]
    pub show_nodes: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_nodes: false,
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}
