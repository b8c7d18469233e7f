use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "digraph", version, about = "Directed graph analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Emit debug logs on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Read settings from this file instead of ./digraph.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report connectivity, degrees, and Eulerian properties
    Analyze {
        /// Graph file (.toml, .json, or text edge list)
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// List per-node in/out degrees
        #[arg(long)]
        nodes: bool,
    },
    /// Draw the graph as an SVG diagram
    Render {
        /// Graph file (.toml, .json, or text edge list)
        file: PathBuf,
        /// Output path [default: stdout]
        #[arg(long, short, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Diagram title, overriding the config
        #[arg(long)]
        title: Option<String>,
    },
}
