//! OBO flat-file ontology loader.
//!
//! Only `[Term]` stanzas are read. Everything before the first `[Term]` is
//! header, and parsing stops at the first `[Typedef]`. A stanza looks like:
//!
//! ```text
//! [Term]
//! id: GO:0000028
//! name: ribosomal small subunit assembly
//! namespace: biological_process
//! def: "The aggregation ... small ribosomal subunit." [GOC:jl]
//! is_a: GO:0022618 ! ribonucleoprotein complex assembly
//! relationship: part_of GO:0042255 ! ribosome assembly
//! ```
//!
//! Relation edges point from the term to its parent.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::LoaderConfig;
use crate::error::{Error, Result};
use crate::ontology::{GeneOntology, GoTerm};
use crate::warning::LoadWarning;

/// Parses OBO files into a [`GeneOntology`].
#[derive(Debug, Clone)]
pub struct OboLoader {
    relations: HashSet<String>,
}

impl Default for OboLoader {
    fn default() -> Self {
        Self::from_config(&LoaderConfig::default())
    }
}

impl OboLoader {
    /// Loader keeping only the given relation kinds.
    #[must_use]
    pub fn with_relations<I, S>(relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relations: relations.into_iter().map(Into::into).collect(),
        }
    }

    /// Loader configured from a [`LoaderConfig`].
    #[must_use]
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::with_relations(config.relations.iter().cloned())
    }

    /// Parse an ontology file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened and
    /// [`Error::Io`] if reading fails part way.
    pub fn load_path(&self, path: &Path) -> Result<(GeneOntology, Vec<LoadWarning>)> {
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        let loaded = self.load(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            terms = loaded.0.summary().terms,
            warnings = loaded.1.len(),
            "loaded ontology"
        );
        Ok(loaded)
    }

    /// Parse OBO text from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails.
    pub fn load<R: BufRead>(&self, reader: R) -> Result<(GeneOntology, Vec<LoadWarning>)> {
        let mut ontology = GeneOntology::new();
        let mut warnings = Vec::new();
        let mut stanza: Option<Stanza> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim_end();

            if line.starts_with('[') {
                if let Some(done) = stanza.take() {
                    self.finish(done, &mut ontology, &mut warnings);
                }
                match line {
                    "[Term]" => stanza = Some(Stanza::new(line_number)),
                    "[Typedef]" => break,
                    other => tracing::trace!(line_number, header = other, "skipping stanza"),
                }
                continue;
            }

            if let Some(current) = stanza.as_mut() {
                current.push(line);
            }
        }
        if let Some(done) = stanza.take() {
            self.finish(done, &mut ontology, &mut warnings);
        }

        Ok((ontology, warnings))
    }

    fn finish(
        &self,
        stanza: Stanza,
        ontology: &mut GeneOntology,
        warnings: &mut Vec<LoadWarning>,
    ) {
        if stanza.obsolete {
            tracing::trace!(id = ?stanza.term.id, "skipping obsolete term");
            return;
        }
        if stanza.term.id.is_empty() {
            tracing::warn!(line_number = stanza.line_number, "[Term] stanza without an id");
            warnings.push(LoadWarning::MissingTermId {
                line_number: stanza.line_number,
            });
            return;
        }
        let parents: Vec<_> = stanza
            .parents
            .into_iter()
            .filter(|(kind, _)| self.relations.contains(kind))
            .collect();
        ontology.insert_term(stanza.term, &parents);
    }
}

/// One `[Term]` stanza being accumulated.
#[derive(Debug)]
struct Stanza {
    line_number: usize,
    term: GoTerm,
    parents: Vec<(String, String)>,
    obsolete: bool,
}

impl Stanza {
    fn new(line_number: usize) -> Self {
        Self {
            line_number,
            term: GoTerm::default(),
            parents: Vec::new(),
            obsolete: false,
        }
    }

    fn push(&mut self, line: &str) {
        let Some((tag, value)) = line.split_once(':') else {
            return;
        };
        let value = value.trim();
        match tag {
            "id" => self.term.id = value.to_string(),
            "name" => self.term.name = Some(value.to_string()),
            "namespace" => self.term.namespace = Some(value.to_string()),
            "def" => self.term.definition = quoted(value),
            "alt_id" => self.term.alt_ids.push(value.to_string()),
            "is_obsolete" => self.obsolete = value == "true",
            "is_a" => {
                if let Some(parent) = value.split_whitespace().next() {
                    self.parents.push(("is_a".to_string(), parent.to_string()));
                }
            }
            "relationship" => {
                let mut parts = value.split_whitespace();
                if let (Some(kind), Some(parent)) = (parts.next(), parts.next()) {
                    self.parents.push((kind.to_string(), parent.to_string()));
                }
            }
            _ => {}
        }
    }
}

/// The text of a `"quoted" [refs]` value, with `\"` unescaped.
fn quoted(value: &str) -> Option<String> {
    let body = value.strip_prefix('"')?;
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => text.extend(chars.next()),
            '"' => return Some(text),
            _ => text.push(c),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmaster::Direction;

    const SAMPLE: &str = r#"format-version: 1.2
data-version: releases/2020-11-18
ontology: go

[Term]
id: GO:0000028
name: ribosomal small subunit assembly
namespace: biological_process
def: "The aggregation, arrangement and bonding together of constituent RNAs and proteins to form the small ribosomal subunit." [GOC:jl]
subset: gosubset_prok
synonym: "30S ribosomal subunit assembly" NARROW [GOC:mah]
is_a: GO:0022618 ! ribonucleoprotein complex assembly
relationship: part_of GO:0042255 ! ribosome assembly
relationship: regulates GO:0042274 ! ribosomal small subunit biogenesis

[Term]
id: GO:0022618
name: ribonucleoprotein complex assembly
namespace: biological_process
alt_id: GO:0000001
def: "The \"aggregation\" of proteins and RNA." [GOC:jl]

[Term]
id: GO:0000005
name: obsolete ribosomal chaperone activity
is_obsolete: true
is_a: GO:0022618

[Term]
name: missing id

[Typedef]
id: part_of
name: part of

[Term]
id: GO:9999999
name: after typedef
"#;

    fn load(text: &str) -> (GeneOntology, Vec<LoadWarning>) {
        OboLoader::default().load(text.as_bytes()).unwrap()
    }

    #[test]
    fn parses_term_attributes() {
        let (go, _) = load(SAMPLE);
        let term = go.term("GO:0000028").unwrap();

        assert_eq!(term.name.as_deref(), Some("ribosomal small subunit assembly"));
        assert_eq!(term.namespace.as_deref(), Some("biological_process"));
        assert!(term
            .definition
            .as_deref()
            .unwrap()
            .starts_with("The aggregation, arrangement"));
    }

    #[test]
    fn unescapes_quotes_in_definitions() {
        let (go, _) = load(SAMPLE);
        assert_eq!(
            go.term("GO:0022618").unwrap().definition.as_deref(),
            Some("The \"aggregation\" of proteins and RNA.")
        );
    }

    #[test]
    fn keeps_configured_relations_only() {
        let (go, _) = load(SAMPLE);
        let graph = go.graph();
        let edges = graph
            .edges_of(&"GO:0000028".to_string(), Direction::Outgoing)
            .unwrap();

        let found: Vec<_> = edges.iter().map(|e| (e.target.as_str(), e.label)).collect();
        assert_eq!(
            found,
            vec![
                ("GO:0022618", Some("is_a")),
                ("GO:0042255", Some("part_of")),
            ]
        );
    }

    #[test]
    fn custom_relations_change_the_edges() {
        let loader = OboLoader::with_relations(["regulates"]);
        let (go, _) = loader.load(SAMPLE.as_bytes()).unwrap();

        let parents = go
            .graph()
            .neighbors(&"GO:0000028".to_string(), Direction::Outgoing)
            .unwrap();
        assert_eq!(parents, vec!["GO:0042274"]);
    }

    #[test]
    fn skips_obsolete_terms_and_stops_at_typedef() {
        let (go, _) = load(SAMPLE);
        assert!(go.term("GO:0000005").is_none());
        assert!(go.term("GO:9999999").is_none());
        assert!(!go.graph().contains(&"GO:0000005".to_string()));
        assert_eq!(go.summary().terms, 2);
    }

    #[test]
    fn registers_alternate_ids() {
        let (go, _) = load(SAMPLE);
        assert_eq!(go.resolve("GO:0000001"), Some("GO:0022618"));
        assert_eq!(
            go.term("GO:0022618").unwrap().alt_ids,
            vec!["GO:0000001".to_string()]
        );
    }

    #[test]
    fn warns_on_stanza_without_id() {
        let (_, warnings) = load(SAMPLE);
        assert_eq!(warnings, vec![LoadWarning::MissingTermId { line_number: 29 }]);
    }

    #[test]
    fn header_only_file_is_empty() {
        let (go, warnings) = load("format-version: 1.2\nontology: go\n");
        assert!(go.graph().is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn last_stanza_is_kept_at_eof() {
        let (go, _) = load("[Term]\nid: GO:1\nis_a: GO:2\n[Term]\nid: GO:2");
        assert_eq!(go.summary().terms, 2);
        assert_eq!(go.graph().edge_count(), 1);
        assert!(go.graph().is_acyclic());
    }

    #[test]
    fn quoted_handles_missing_quotes() {
        assert_eq!(quoted("\"text\" [ref]"), Some("text".to_string()));
        assert_eq!(quoted("no quotes"), None);
        assert_eq!(quoted("\"unterminated"), None);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = OboLoader::default()
            .load_path(Path::new("/nonexistent/go-basic.obo"))
            .unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}
