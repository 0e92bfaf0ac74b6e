//! `graphmaster depth` command implementation.

use colored::Colorize;
use graphmaster_go::GeneOntology;
use serde::Serialize;

use super::display::{describe, print_json};

#[derive(Serialize)]
struct DepthReport<'a> {
    root: Option<&'a str>,
    depth: usize,
}

/// Run the depth command.
pub fn run(go: &GeneOntology, root: Option<&str>, json: bool) -> anyhow::Result<()> {
    let graph = go.graph();
    let root_id = root.map(str::to_string);
    let depth = graph.max_depth(root_id.as_ref())?;

    if json {
        return print_json(&DepthReport { root, depth });
    }

    match root {
        Some(root) => println!(
            "{} from {}: {}",
            "Longest path".white().bold(),
            describe(go, root),
            depth.to_string().green()
        ),
        None => println!(
            "{} over {} roots: {}",
            "Longest path".white().bold(),
            graph.roots().len(),
            depth.to_string().green()
        ),
    }

    Ok(())
}
