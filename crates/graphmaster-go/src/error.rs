//! Error types for loader and query operations.
//!
//! Only problems that stop a load are errors. Per-line data problems in an
//! otherwise readable file are reported as [`crate::warning::LoadWarning`]s.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for graphmaster-go operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for loader and query operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input is structurally unusable (not merely one bad line).
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A graph query failed.
    #[error(transparent)]
    Graph(#[from] graphmaster::Error),
}

impl Error {
    /// Wrap an I/O failure on `path`.
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
