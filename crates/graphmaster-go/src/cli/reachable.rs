//! `graphmaster reachable` command implementation.

use std::collections::BTreeMap;

use colored::Colorize;
use graphmaster::Direction;
use graphmaster_go::GeneOntology;
use serde::Serialize;

use super::display::{describe, print_json};

/// Maximum nodes to display per distance level.
const MAX_PER_DEPTH: usize = 15;

#[derive(Serialize)]
struct Reached<'a> {
    id: &'a str,
    distance: usize,
}

/// Run the reachable command.
pub fn run(
    go: &GeneOntology,
    id: &str,
    direction: Direction,
    include_start: bool,
    json: bool,
) -> anyhow::Result<()> {
    let start = id.to_string();
    let tree = go.graph().bfs(&start, direction)?;
    let reached: Vec<Reached<'_>> = tree
        .reached()
        .filter(|(_, distance)| include_start || *distance > 0)
        .map(|(node, distance)| Reached {
            id: node.as_str(),
            distance,
        })
        .collect();

    if json {
        return print_json(&reached);
    }

    let title = match direction {
        Direction::Outgoing => "Reachable from",
        Direction::Incoming => "Reaching",
    };
    println!("{} {}:", title.white().bold(), describe(go, id));

    if reached.is_empty() {
        println!("    {}", "Nothing reachable.".dimmed());
        return Ok(());
    }

    // Group by distance for clearer output
    let mut by_distance: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for r in &reached {
        by_distance.entry(r.distance).or_default().push(r.id);
    }

    for (distance, ids) in &by_distance {
        println!(
            "  {} ({}):",
            format!("Distance {distance}").yellow(),
            ids.len()
        );
        for node in ids.iter().take(MAX_PER_DEPTH) {
            println!("    {} {}", "•".dimmed(), describe(go, node));
        }
        if ids.len() > MAX_PER_DEPTH {
            println!(
                "    {} ... and {} more at distance {distance}",
                "•".dimmed(),
                ids.len() - MAX_PER_DEPTH
            );
        }
    }

    println!();
    println!(
        "{}: {} nodes (direction: {direction})",
        "Summary".dimmed(),
        reached.len().to_string().green()
    );

    Ok(())
}
