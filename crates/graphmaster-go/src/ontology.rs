//! Gene Ontology graph with attached gene products.
//!
//! Terms and gene products share one [`Graph<String>`]:
//!
//! ```text
//!   gene product ──annotates──▶ term ──is_a / part_of──▶ parent term
//! ```
//!
//! Node attributes live in side tables keyed by id, and evidence codes are
//! kept per `(gene product, term)` annotation.

use std::collections::{HashMap, HashSet};

use graphmaster::{Direction, Graph};
use serde::Serialize;

use crate::error::Result;

/// Edge label used for gene product annotations.
pub const ANNOTATES: &str = "annotates";

/// A GO term parsed from an OBO `[Term]` stanza.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoTerm {
    /// Primary id, e.g. `GO:0005634`.
    pub id: String,
    /// Human-readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `biological_process`, `molecular_function` or `cellular_component`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Definition text without its quotes and references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Secondary ids that were merged into this term.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alt_ids: Vec<String>,
}

/// An annotated gene product from a GAF file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneProduct {
    /// Database object id, e.g. `O05154`.
    pub id: String,
    /// Object symbol.
    pub symbol: String,
    /// Object name.
    pub description: String,
    /// Synonyms.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// What a graph node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// A GO term.
    Term,
    /// An annotated gene product.
    GeneProduct,
}

/// Counts reported by [`GeneOntology::summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OntologySummary {
    /// All graph nodes, including referenced-but-undefined parents.
    pub nodes: usize,
    /// All graph edges.
    pub edges: usize,
    /// Defined GO terms.
    pub terms: usize,
    /// Annotated gene products.
    pub gene_products: usize,
    /// Term-to-term relation edges.
    pub relations: usize,
    /// Gene product annotation edges.
    pub annotations: usize,
    /// Registered alternate ids.
    pub alt_ids: usize,
}

/// The ontology graph plus term and gene product attributes.
#[derive(Debug, Clone, Default)]
pub struct GeneOntology {
    graph: Graph<String>,
    terms: HashMap<String, GoTerm>,
    products: HashMap<String, GeneProduct>,
    alt_ids: HashMap<String, String>,
    evidence: HashMap<(String, String), Vec<String>>,
}

impl GeneOntology {
    /// Create an empty ontology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying graph, for the generic algorithms.
    #[must_use]
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Register a term and its relation edges (`(kind, parent)` pairs).
    ///
    /// A term seen again replaces the earlier attributes; edges accumulate.
    pub fn insert_term(&mut self, term: GoTerm, parents: &[(String, String)]) {
        let label = term.name.clone().unwrap_or_else(|| term.id.clone());
        if !self.graph.add_labeled_node(term.id.clone(), label.clone()) {
            // Created earlier as a forward-referenced parent.
            let _ = self.graph.set_label(&term.id, label);
        }
        for alt in &term.alt_ids {
            self.alt_ids.insert(alt.clone(), term.id.clone());
        }
        for (kind, parent) in parents {
            self.graph
                .add_edge(term.id.clone(), parent.clone(), Some(kind.as_str()));
        }
        self.terms.insert(term.id.clone(), term);
    }

    /// Attach `product` to `term` with one evidence code.
    ///
    /// Product attributes are overwritten by the latest record, matching
    /// GAF files that repeat the product on every annotation line.
    pub fn annotate(&mut self, product: GeneProduct, term: &str, evidence_code: &str) {
        self.graph
            .add_labeled_node(product.id.clone(), product.symbol.clone());
        self.graph
            .add_edge(product.id.clone(), term.to_string(), Some(ANNOTATES));
        self.evidence
            .entry((product.id.clone(), term.to_string()))
            .or_default()
            .push(evidence_code.to_string());
        self.products.insert(product.id.clone(), product);
    }

    /// Look up a term by its primary id.
    #[must_use]
    pub fn term(&self, id: &str) -> Option<&GoTerm> {
        self.terms.get(id)
    }

    /// Look up a gene product.
    #[must_use]
    pub fn gene_product(&self, id: &str) -> Option<&GeneProduct> {
        self.products.get(id)
    }

    /// Map `id` to a defined term, following alternate-id chains.
    ///
    /// Returns `None` if the chain ends on an id that is not a term or
    /// loops back on itself.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&str> {
        let mut current = id;
        let mut seen = HashSet::new();
        loop {
            if let Some((key, _)) = self.terms.get_key_value(current) {
                return Some(key.as_str());
            }
            if !seen.insert(current) {
                return None;
            }
            current = self.alt_ids.get(current)?.as_str();
        }
    }

    /// Whether `id` names a term or a gene product.
    #[must_use]
    pub fn kind_of(&self, id: &str) -> Option<NodeKind> {
        if self.terms.contains_key(id) {
            Some(NodeKind::Term)
        } else if self.products.contains_key(id) {
            Some(NodeKind::GeneProduct)
        } else {
            None
        }
    }

    /// Evidence codes recorded for one annotation, in file order.
    #[must_use]
    pub fn evidence(&self, gene_product: &str, term: &str) -> &[String] {
        self.evidence
            .get(&(gene_product.to_string(), term.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Terms a gene product is annotated with.
    ///
    /// With `recursive`, every ancestor of those terms is included as well.
    /// Results follow graph traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`graphmaster::Error::UnknownNode`] if `gene_product` is not
    /// in the graph.
    pub fn go_terms(&self, gene_product: &str, recursive: bool) -> Result<Vec<&GoTerm>> {
        let id = self.node_key(gene_product)?;
        let reached: Vec<&String> = if recursive {
            self.graph
                .transitive(id, Direction::Outgoing, false)?
                .into_iter()
                .collect()
        } else {
            self.graph.direct(id, Direction::Outgoing)?
        };
        Ok(reached
            .into_iter()
            .filter_map(|node| self.terms.get(node))
            .collect())
    }

    /// Gene products annotated with a term.
    ///
    /// With `recursive`, products annotated with any descendant term are
    /// included. Alternate ids are accepted for `term`.
    ///
    /// # Errors
    ///
    /// Returns [`graphmaster::Error::UnknownNode`] if `term` cannot be
    /// resolved to a graph node.
    pub fn gene_products(&self, term: &str, recursive: bool) -> Result<Vec<&GeneProduct>> {
        let id = self.node_key(self.resolve(term).unwrap_or(term))?;
        let reached: Vec<&String> = if recursive {
            self.graph
                .transitive(id, Direction::Incoming, false)?
                .into_iter()
                .collect()
        } else {
            self.graph.direct(id, Direction::Incoming)?
        };
        Ok(reached
            .into_iter()
            .filter_map(|node| self.products.get(node))
            .collect())
    }

    /// Node, edge and attribute counts.
    #[must_use]
    pub fn summary(&self) -> OntologySummary {
        let annotations = self
            .graph
            .edges()
            .filter(|e| e.label == Some(ANNOTATES))
            .count();
        OntologySummary {
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
            terms: self.terms.len(),
            gene_products: self.products.len(),
            relations: self.graph.edge_count() - annotations,
            annotations,
            alt_ids: self.alt_ids.len(),
        }
    }

    /// The graph's own `String` key for `id`.
    fn node_key(&self, id: &str) -> Result<&String> {
        self.terms
            .get_key_value(id)
            .map(|(k, _)| k)
            .or_else(|| self.products.get_key_value(id).map(|(k, _)| k))
            .ok_or_else(|| graphmaster::Error::UnknownNode(id.to_string()).into())
    }
}
