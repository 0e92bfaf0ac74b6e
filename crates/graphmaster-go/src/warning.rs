//! Non-fatal problems found while loading ontology or annotation files.
//!
//! Loaders keep going past bad records and hand these back alongside the
//! loaded data, so one malformed line does not discard a whole file.

use std::fmt;

/// A skipped or partially applied input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A line did not have the expected shape.
    ///
    /// **Effect**: the line is skipped.
    MalformedLine {
        /// 1-based line number.
        line_number: usize,
        /// Why the line was rejected.
        reason: String,
    },

    /// An OBO `[Term]` stanza had no `id:` line.
    ///
    /// **Effect**: the stanza is skipped.
    MissingTermId {
        /// Line number of the `[Term]` header.
        line_number: usize,
    },

    /// An annotation referenced a GO id that is neither a known term nor an
    /// alternate id of one.
    ///
    /// **Effect**: the annotation is skipped; the gene product is not added.
    UnknownTerm {
        /// 1-based line number.
        line_number: usize,
        /// Annotated gene product.
        gene_product: String,
        /// The unresolved GO id.
        term: String,
    },
}

impl LoadWarning {
    /// The line the warning refers to.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedLine { line_number, .. }
            | Self::MissingTermId { line_number }
            | Self::UnknownTerm { line_number, .. } => *line_number,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                line_number,
                reason,
            } => write!(f, "line {line_number}: malformed line: {reason}"),
            Self::MissingTermId { line_number } => {
                write!(f, "line {line_number}: [Term] stanza without an id")
            }
            Self::UnknownTerm {
                line_number,
                gene_product,
                term,
            } => write!(
                f,
                "line {line_number}: cannot attach gene product {gene_product} to unknown GO term {term}"
            ),
        }
    }
}
