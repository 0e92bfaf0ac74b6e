//! Gene Ontology loaders and queries on top of [`graphmaster`].
//!
//! - [`obo`] reads an OBO ontology into a [`GeneOntology`]
//! - [`gaf`] attaches gene product annotations from GAF files
//! - [`delim`] reads a plain delimited edge list into a [`graphmaster::Graph`]
//!
//! Loaders return the data together with a list of [`LoadWarning`]s for the
//! records they had to skip.
//!
//! # Example
//!
//! ```
//! use graphmaster_go::obo::OboLoader;
//!
//! let obo = "[Term]\nid: GO:0000002\nis_a: GO:0000001\n[Term]\nid: GO:0000001\n";
//! let (go, warnings) = OboLoader::default().load(obo.as_bytes()).unwrap();
//!
//! assert!(warnings.is_empty());
//! assert_eq!(go.graph().max_depth(None).unwrap(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod delim;
pub mod error;
pub mod gaf;
pub mod obo;
pub mod ontology;
pub mod warning;

pub use config::LoaderConfig;
pub use error::{Error, Result};
pub use ontology::{GeneOntology, GeneProduct, GoTerm, NodeKind, OntologySummary, ANNOTATES};
pub use warning::LoadWarning;

/// Load the configured ontology and every annotation file, in order.
///
/// # Errors
///
/// Returns [`Error::Config`] if no ontology file is configured, and any
/// error from the individual loaders.
pub fn load(config: &LoaderConfig) -> Result<(GeneOntology, Vec<LoadWarning>)> {
    let (mut ontology, mut warnings) =
        obo::OboLoader::from_config(config).load_path(config.ontology_path()?)?;

    let annotations = gaf::GafLoader::new(config.warn_unknown_terms);
    for path in &config.annotations {
        warnings.extend(annotations.load_path(&mut ontology, path)?);
    }

    tracing::info!(
        terms = ontology.summary().terms,
        gene_products = ontology.summary().gene_products,
        warnings = warnings.len(),
        "ontology ready"
    );
    Ok((ontology, warnings))
}
