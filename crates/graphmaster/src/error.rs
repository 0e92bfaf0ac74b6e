//! Error types for graph queries.
//!
//! Every error is recoverable and carries the offending node or the detected
//! cycle so callers can report malformed input.

use thiserror::Error;

/// Result type for graphmaster operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for graph queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A query referenced a node that was never registered.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Topological order or depth was requested on a cyclic graph.
    #[error("graph contains a cycle: {}", format_cycle(.path))]
    Cycle {
        /// Nodes on the detected cycle, starting at the node the back edge
        /// points to.
        path: Vec<String>,
    },

    /// An argument had an unsupported value (e.g. an unparseable direction).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build a cycle error from any displayable node sequence.
    pub(crate) fn cycle<I, T>(path: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: std::fmt::Display,
    {
        Self::Cycle {
            path: path.into_iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Render a cycle as `a -> b -> c -> a`.
fn format_cycle(path: &[String]) -> String {
    let mut rendered = path.join(" -> ");
    if let Some(first) = path.first() {
        rendered.push_str(" -> ");
        rendered.push_str(first);
    }
    rendered
}
