//! Delimited edge-list loader.
//!
//! The first line names the columns. The first two columns of every row are
//! the source and target node; one further column may be picked, by header
//! name, as the edge label.
//!
//! ```text
//! source	target	relation
//! GO:0000028	GO:0022618	is_a
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use graphmaster::Graph;

use crate::error::{Error, Result};
use crate::warning::LoadWarning;

/// Reads `source<sep>target[<sep>...]` rows into a [`Graph<String>`].
#[derive(Debug, Clone)]
pub struct DelimitedLoader {
    separator: char,
    label_column: Option<String>,
}

impl Default for DelimitedLoader {
    fn default() -> Self {
        Self {
            separator: '\t',
            label_column: None,
        }
    }
}

impl DelimitedLoader {
    /// Tab-separated loader without edge labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different column separator.
    #[must_use]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Take edge labels from the column with this header name.
    #[must_use]
    pub fn label_column(mut self, name: impl Into<String>) -> Self {
        self.label_column = Some(name.into());
        self
    }

    /// Read an edge-list file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened, and the errors
    /// of [`DelimitedLoader::load`].
    pub fn load_path(&self, path: &Path) -> Result<(Graph<String>, Vec<LoadWarning>)> {
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        self.load(BufReader::new(file))
    }

    /// Read an edge list from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the header is missing, has fewer than two
    /// columns, or lacks the configured label column, and [`Error::Io`] if
    /// reading fails.
    pub fn load<R: BufRead>(&self, reader: R) -> Result<(Graph<String>, Vec<LoadWarning>)> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?.ok_or_else(|| Error::Parse {
            line: 1,
            message: "missing header line".to_string(),
        })?;
        let columns: Vec<&str> = header.trim_end().split(self.separator).collect();
        if columns.len() < 2 {
            return Err(Error::Parse {
                line: 1,
                message: "header needs source and target columns".to_string(),
            });
        }
        let label_index = self.label_index(&columns)?;

        let mut graph = Graph::new();
        let mut warnings = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            let line_number = index + 2;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(self.separator).collect();
            let needed = label_index.map_or(2, |i| i + 1);
            if fields.len() < needed {
                warnings.push(LoadWarning::MalformedLine {
                    line_number,
                    reason: format!("expected {needed} columns, found {}", fields.len()),
                });
                continue;
            }

            let label = label_index.map(|i| fields[i]).filter(|l| !l.is_empty());
            graph.add_edge(fields[0].to_string(), fields[1].to_string(), label);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded edge list"
        );
        Ok((graph, warnings))
    }

    fn label_index(&self, columns: &[&str]) -> Result<Option<usize>> {
        let Some(name) = &self.label_column else {
            return Ok(None);
        };
        columns
            .iter()
            .skip(2)
            .position(|c| *c == name.as_str())
            .map(|i| Some(i + 2))
            .ok_or_else(|| Error::Parse {
                line: 1,
                message: format!("no column named '{name}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmaster::Direction;

    const EDGES: &str = "child\tparent\tweight\trelation\n\
                         GO:3\tGO:2\t1\tis_a\n\
                         GO:2\tGO:1\t1\tis_a\n\
                         GO:4\tGO:2\t2\tpart_of\n";

    #[test]
    fn reads_unlabeled_edges() {
        let (g, warnings) = DelimitedLoader::new().load(EDGES.as_bytes()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert!(g.edges().all(|e| e.label.is_none()));
    }

    #[test]
    fn labels_come_from_named_column() {
        let (g, _) = DelimitedLoader::new()
            .label_column("relation")
            .load(EDGES.as_bytes())
            .unwrap();

        let edges = g.edges_of(&"GO:4".to_string(), Direction::Outgoing).unwrap();
        assert_eq!(edges[0].label, Some("part_of"));
    }

    #[test]
    fn custom_separator() {
        let csv = "a,b\nx,y\ny,z\n";
        let (g, _) = DelimitedLoader::new().separator(',').load(csv.as_bytes()).unwrap();
        assert_eq!(g.topological_order().unwrap(), vec!["x", "y", "z"]);
    }

    #[test]
    fn short_rows_are_warnings() {
        let text = "a\tb\tlabel\nx\ty\tl\nlonely\n\nx\tz\n";
        let (g, warnings) = DelimitedLoader::new()
            .label_column("label")
            .load(text.as_bytes())
            .unwrap();

        assert_eq!(g.edge_count(), 1);
        let lines: Vec<_> = warnings.iter().map(LoadWarning::line_number).collect();
        assert_eq!(lines, vec![3, 5]);
    }

    #[test]
    fn header_problems_are_errors() {
        assert!(matches!(
            DelimitedLoader::new().load("".as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            DelimitedLoader::new().load("only\n".as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));
        assert!(matches!(
            DelimitedLoader::new()
                .label_column("missing")
                .load(EDGES.as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));
    }
}
