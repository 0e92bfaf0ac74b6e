//! `graphmaster order` command implementation.

use colored::Colorize;
use graphmaster_go::GeneOntology;

use super::display::{describe, print_json};

/// Run the order command.
pub fn run(go: &GeneOntology, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let order = go.graph().topological_order()?;
    let shown = &order[..limit.map_or(order.len(), |l| l.min(order.len()))];

    if json {
        return print_json(shown);
    }

    println!(
        "{} ({} nodes):",
        "Topological order".white().bold(),
        order.len().to_string().green()
    );
    for (position, id) in shown.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{:>6}", position + 1).dimmed(),
            describe(go, id)
        );
    }
    if shown.len() < order.len() {
        println!(
            "  {} ... and {} more",
            "•".dimmed(),
            order.len() - shown.len()
        );
    }

    Ok(())
}
