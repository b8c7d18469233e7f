//! Command dispatch logic extracted from binary to reduce main function size.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use super::args::Commands;
use crate::config::Config;
use crate::exit::DigraphExit;
use crate::input;
use crate::render::render_svg;
use crate::report::{print_report, GraphReport};

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the graph cannot be loaded or the output cannot be written.
pub fn execute(command: Commands, config: &Config) -> Result<DigraphExit> {
    if !config.report.color {
        colored::control::set_override(false);
    }
    match command {
        Commands::Analyze { file, json, nodes } => {
            handle_analyze(&file, json, nodes || config.report.show_nodes)
        }
        Commands::Render {
            file,
            output,
            title,
        } => handle_render(&file, output, title, config),
    }
}

/// Loads the config named on the command line, or `./digraph.toml` when present.
///
/// # Errors
/// Returns error if an explicitly named config file cannot be read or parsed.
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::load()),
    }
}

fn handle_analyze(file: &Path, json: bool, show_nodes: bool) -> Result<DigraphExit> {
    let graph = load_graph(file)?;
    let report = GraphReport::from_graph(&graph);

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report, show_nodes);
    }
    Ok(DigraphExit::Success)
}

fn handle_render(
    file: &Path,
    output: Option<PathBuf>,
    title: Option<String>,
    config: &Config,
) -> Result<DigraphExit> {
    let graph = load_graph(file)?;

    let mut render = config.render.clone();
    if let Some(title) = title {
        render.title = title;
    }
    let svg = render_svg(&graph, &render);

    let Some(out) = output else {
        print!("{svg}");
        return Ok(DigraphExit::Success);
    };
    fs::write(&out, svg).with_context(|| format!("Failed to write {}", out.display()))?;
    info!(path = %out.display(), nodes = graph.node_count(), "rendered diagram");
    eprintln!("{} {}", "✓ Wrote".green(), out.display());
    Ok(DigraphExit::Success)
}

fn load_graph(file: &Path) -> Result<crate::graph::DirectedGraph<String>> {
    input::load(file).with_context(|| format!("Failed to load graph {}", file.display()))
}
