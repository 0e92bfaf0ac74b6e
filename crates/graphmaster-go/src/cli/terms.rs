//! `graphmaster terms` command implementation.

use colored::Colorize;
use graphmaster_go::GeneOntology;

use super::display::{print_items, print_json};

/// Run the terms command.
pub fn run(
    go: &GeneOntology,
    gene_product: &str,
    recursive: bool,
    json: bool,
) -> anyhow::Result<()> {
    let terms = go.go_terms(gene_product, recursive)?;

    if json {
        return print_json(&terms);
    }

    let scope = if recursive { " (with ancestors)" } else { "" };
    println!(
        "{} for {}{}:",
        "GO terms".white().bold(),
        gene_product.cyan().bold(),
        scope.dimmed()
    );
    print_items(
        terms.iter().map(|t| {
            let name = t.name.as_deref().unwrap_or("");
            let namespace = t.namespace.as_deref().unwrap_or("");
            let evidence = go.evidence(gene_product, &t.id).join(", ");
            let mut line = format!("{} {}", t.id.white(), name);
            if !namespace.is_empty() {
                line.push_str(&format!(" {}", format!("[{namespace}]").dimmed()));
            }
            if !evidence.is_empty() {
                line.push_str(&format!(" {}", format!("({evidence})").yellow()));
            }
            line
        }),
        "No annotated terms.",
    );

    Ok(())
}
