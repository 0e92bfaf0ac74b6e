//! `graphmaster cycles` command implementation.

use colored::Colorize;
use graphmaster::EdgeKind;
use graphmaster_go::GeneOntology;
use serde::Serialize;

use super::display::{format_path, print_json};

#[derive(Serialize)]
struct CycleReport<'a> {
    acyclic: bool,
    cycle: Option<Vec<&'a String>>,
    back_edges: usize,
}

/// Run the cycles command.
pub fn run(go: &GeneOntology, json: bool) -> anyhow::Result<()> {
    let graph = go.graph();
    let cycle = graph.find_cycle();
    let report = CycleReport {
        acyclic: cycle.is_none(),
        back_edges: graph.classify_edges().count(EdgeKind::Back),
        cycle,
    };

    if json {
        return print_json(&report);
    }

    let Some(cycle) = &report.cycle else {
        println!("{}", "No cycles detected.".green());
        return Ok(());
    };

    println!(
        "Found {} back edges; first cycle ({} nodes):",
        report.back_edges.to_string().red().bold(),
        cycle.len()
    );
    println!();
    println!("    {}", format_path(cycle, true).dimmed());

    Ok(())
}
