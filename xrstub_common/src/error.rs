//! Error types for stub generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a source file or writing stubs.
#[derive(Debug, Error)]
pub enum StubError {
    /// The input file could not be opened or read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        /// File that was being scanned.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from a generic reader or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured prefix did not compile into a pattern.
    #[error("Invalid identifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The configured prefix was empty.
    #[error("Identifier prefix must not be empty")]
    EmptyPrefix,

    /// JSON rendering of the identifier list failed.
    #[error("Failed to render identifier list: {0}")]
    Json(#[from] serde_json::Error),
}

impl StubError {
    /// Create a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the input file was missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Read { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            },
            _ => false,
        }
    }
}
