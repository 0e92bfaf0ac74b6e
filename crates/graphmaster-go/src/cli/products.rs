//! `graphmaster products` command implementation.

use colored::Colorize;
use graphmaster_go::GeneOntology;

use super::display::{print_items, print_json};

/// Run the products command.
pub fn run(go: &GeneOntology, term: &str, recursive: bool, json: bool) -> anyhow::Result<()> {
    let products = go.gene_products(term, recursive)?;

    if json {
        return print_json(&products);
    }

    let resolved = go.resolve(term).unwrap_or(term);
    let scope = if recursive { " (with descendants)" } else { "" };
    println!(
        "{} annotated with {}{}:",
        "Gene products".white().bold(),
        resolved.cyan().bold(),
        scope.dimmed()
    );
    if resolved != term {
        println!("  {}", format!("{term} is an alternate id").dimmed());
    }
    print_items(
        products.iter().map(|p| {
            format!(
                "{} {} {}",
                p.id.white(),
                p.symbol,
                p.description.dimmed()
            )
        }),
        "No annotated gene products.",
    );
    println!();
    println!(
        "{}: {} gene products",
        "Summary".dimmed(),
        products.len().to_string().green()
    );

    Ok(())
}
