// src/report/console.rs
//! Colored terminal output for a [`GraphReport`].

use colored::Colorize;

use super::GraphReport;
use crate::graph::Connectivity;

/// Prints the report summary, optionally followed by per-node degrees.
pub fn print_report(report: &GraphReport, show_nodes: bool) {
    print_summary(report);
    print_connectivity(report);
    print_eulerian(report);

    if show_nodes {
        print_nodes(report);
    }
}

fn print_summary(report: &GraphReport) {
    println!(
        "\n{} {} nodes | {} connections | degree {}",
        "GRAPH".cyan().bold(),
        report.node_count,
        report.connection_count,
        report.degree,
    );
}

fn print_connectivity(report: &GraphReport) {
    let label = match report.connectivity {
        Connectivity::Strong => report.connectivity.label().green().bold(),
        Connectivity::Weak => report.connectivity.label().yellow().bold(),
        Connectivity::None => report.connectivity.label().red().bold(),
    };
    println!("\n{} {label}", "▸ Connectivity:".cyan());
    println!("    strongly connected  {}", yes_no(report.strongly_connected));
    println!("    weakly connected    {}", yes_no(report.weakly_connected));
    println!("    connected           {}", yes_no(report.connected));
}

fn print_eulerian(report: &GraphReport) {
    println!("\n{}", "▸ Eulerian".cyan());
    println!("    circuit             {}", yes_no(report.eulerian_circuit));
    println!("    trail               {}", yes_no(report.eulerian_trail));

    if let (Some(start), Some(end)) = (&report.trail_start, &report.trail_end) {
        println!("      {} {start} → {end}", "from".dimmed());
    }
}

fn print_nodes(report: &GraphReport) {
    println!("\n{}", "▸ Nodes (in / out)".cyan());
    for node in &report.nodes {
        let counts = format!("{} / {}", node.in_degree, node.out_degree);
        if node.in_degree == node.out_degree {
            println!("    {:<18}  {}", node.id, counts.dimmed());
        } else {
            println!("    {:<18}  {}", node.id, counts.yellow());
        }
    }
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}
