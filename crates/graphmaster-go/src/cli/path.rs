//! `graphmaster path` command implementation.

use colored::Colorize;
use graphmaster_go::GeneOntology;
use serde::Serialize;

use super::display::{format_path, print_json};

#[derive(Serialize)]
struct PathReport<'a> {
    from: &'a str,
    to: &'a str,
    path: Option<Vec<&'a String>>,
}

/// Run the path command.
pub fn run(go: &GeneOntology, from: &str, to: &str, json: bool) -> anyhow::Result<()> {
    let (source, target) = (from.to_string(), to.to_string());
    let path = go.graph().shortest_path(&source, &target)?;

    if json {
        return print_json(&PathReport { from, to, path });
    }

    match path {
        Some(path) => {
            println!(
                "{} ({} edges):",
                "Shortest path".white().bold(),
                (path.len() - 1).to_string().green()
            );
            println!("    {}", format_path(&path, false));
        }
        None => println!(
            "{}",
            format!("No path from {from} to {to}.").yellow()
        ),
    }

    Ok(())
}
