//! GO annotation (GAF) loader.
//!
//! GAF lines are tab separated with at least 11 columns:
//!
//! | col | content          | used as                  |
//! |-----|------------------|--------------------------|
//! | 2   | DB object id     | gene product id          |
//! | 3   | DB object symbol | [`GeneProduct::symbol`]  |
//! | 5   | GO id            | annotated term           |
//! | 7   | evidence code    | [`GeneOntology::evidence`] |
//! | 10  | DB object name   | [`GeneProduct::description`] |
//! | 11  | synonyms (`\|`)  | [`GeneProduct::aliases`] |
//!
//! Lines starting with `!` are comments.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::ontology::{GeneOntology, GeneProduct};
use crate::warning::LoadWarning;

/// Minimum number of columns an annotation line must have.
pub const MIN_COLUMNS: usize = 11;

/// Attaches gene product annotations to a loaded ontology.
#[derive(Debug, Clone)]
pub struct GafLoader {
    warn_unknown_terms: bool,
}

impl Default for GafLoader {
    fn default() -> Self {
        Self {
            warn_unknown_terms: true,
        }
    }
}

impl GafLoader {
    /// Create a loader.
    ///
    /// With `warn_unknown_terms` off, annotations to unknown terms are still
    /// skipped and reported, but not logged.
    #[must_use]
    pub fn new(warn_unknown_terms: bool) -> Self {
        Self { warn_unknown_terms }
    }

    /// Load an annotation file into `ontology`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened and
    /// [`Error::Io`] if reading fails part way.
    pub fn load_path(
        &self,
        ontology: &mut GeneOntology,
        path: &Path,
    ) -> Result<Vec<LoadWarning>> {
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        let warnings = self.load(ontology, BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            gene_products = ontology.summary().gene_products,
            warnings = warnings.len(),
            "loaded annotations"
        );
        Ok(warnings)
    }

    /// Load annotations from any buffered reader into `ontology`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails.
    pub fn load<R: BufRead>(
        &self,
        ontology: &mut GeneOntology,
        reader: R,
    ) -> Result<Vec<LoadWarning>> {
        let mut warnings = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < MIN_COLUMNS {
                tracing::warn!(
                    line_number,
                    columns = cols.len(),
                    "skipping short annotation line"
                );
                warnings.push(LoadWarning::MalformedLine {
                    line_number,
                    reason: format!(
                        "expected at least {MIN_COLUMNS} columns, found {}",
                        cols.len()
                    ),
                });
                continue;
            }

            let gene_product = cols[1];
            let Some(term) = ontology.resolve(cols[4]).map(str::to_string) else {
                if self.warn_unknown_terms {
                    tracing::warn!(
                        line_number,
                        gene_product,
                        term = cols[4],
                        "cannot attach gene product to unknown GO term"
                    );
                }
                warnings.push(LoadWarning::UnknownTerm {
                    line_number,
                    gene_product: gene_product.to_string(),
                    term: cols[4].to_string(),
                });
                continue;
            };

            let product = GeneProduct {
                id: gene_product.to_string(),
                symbol: cols[2].to_string(),
                description: cols[9].to_string(),
                aliases: cols[10]
                    .split('|')
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect(),
            };
            ontology.annotate(product, &term, cols[6]);
        }

        Ok(warnings)
    }
}
