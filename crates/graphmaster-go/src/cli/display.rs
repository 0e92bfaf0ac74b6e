//! Common display utilities for CLI commands.

use std::fmt::Display;

use colored::Colorize;
use graphmaster_go::GeneOntology;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Join a node path as `a → b → c`.
///
/// With `closed`, the first node is repeated at the end to show the cycle.
pub fn format_path<N: Display>(path: &[&N], closed: bool) -> String {
    let mut parts: Vec<String> = path.iter().map(ToString::to_string).collect();
    if closed {
        if let Some(first) = path.first() {
            parts.push(first.to_string());
        }
    }
    parts.join(" → ")
}

/// A node id followed by its term name or gene product symbol, if known.
pub fn describe(go: &GeneOntology, id: &str) -> String {
    let name = go
        .term(id)
        .and_then(|t| t.name.as_deref())
        .or_else(|| go.gene_product(id).map(|p| p.symbol.as_str()));
    match name {
        Some(name) => format!("{} {}", id.white(), name.dimmed()),
        None => id.white().to_string(),
    }
}

/// Print one bulleted line per item, or `empty_message` if there are none.
pub fn print_items<I, S>(items: I, empty_message: &str)
where
    I: IntoIterator<Item = S>,
    S: Display,
{
    let mut printed = false;
    for item in items {
        println!("    {} {item}", "•".dimmed());
        printed = true;
    }
    if !printed {
        println!("    {}", empty_message.dimmed());
    }
}
