//! `graphmaster stats` command implementation.

use colored::Colorize;
use graphmaster_go::{GeneOntology, OntologySummary};
use serde::Serialize;

use super::display::print_json;

#[derive(Serialize)]
struct StatsReport {
    #[serde(flatten)]
    summary: OntologySummary,
    roots: usize,
    leaves: usize,
    acyclic: bool,
    max_depth: Option<usize>,
}

/// Run the stats command.
pub fn run(go: &GeneOntology, json: bool) -> anyhow::Result<()> {
    let graph = go.graph();
    let acyclic = graph.is_acyclic();
    let report = StatsReport {
        summary: go.summary(),
        roots: graph.roots().len(),
        leaves: graph.leaves().len(),
        acyclic,
        max_depth: if acyclic {
            Some(graph.max_depth(None)?)
        } else {
            None
        },
    };

    if json {
        return print_json(&report);
    }

    let s = &report.summary;
    println!("{}", "Graphmaster Statistics".cyan().bold());
    println!();

    println!(
        "  {}: {} nodes, {} edges",
        "Graph".white().bold(),
        s.nodes.to_string().green(),
        s.edges.to_string().green()
    );
    println!("    {}: {}", "Roots".dimmed(), report.roots);
    println!("    {}: {}", "Leaves".dimmed(), report.leaves);
    println!();

    println!(
        "  {}: {} terms",
        "Ontology".white().bold(),
        s.terms.to_string().green()
    );
    println!("    {}: {}", "Relations".dimmed(), s.relations);
    println!("    {}: {}", "Alternate ids".dimmed(), s.alt_ids);
    println!();

    println!(
        "  {}: {} gene products",
        "Annotations".white().bold(),
        s.gene_products.to_string().green()
    );
    println!("    {}: {}", "Annotation edges".dimmed(), s.annotations);
    println!();

    match report.max_depth {
        Some(depth) => println!(
            "  {}: {}",
            "Max depth".white().bold(),
            depth.to_string().green()
        ),
        None => println!(
            "  {}: graph contains a cycle (run `graphmaster cycles`)",
            "Warning".yellow().bold()
        ),
    }

    Ok(())
}
