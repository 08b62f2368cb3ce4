//! Unified error types for osv-gen.
//!
//! Only batch-fatal failures surface here; skip-level failures (malformed
//! CPE entries, unparseable fix URLs, write errors) are logged at their
//! source and never abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A feed file exists but does not decode into the expected schema
    #[error("Failed to decode feed file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input directory holds no feed files at all
    #[error("No feed files (*.json) found under {path:?}")]
    EmptyInput { path: PathBuf },
}

impl ConvertError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error with path context
    pub fn decode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }
}

/// Convenient Result type for osv-gen operations
pub type Result<T> = std::result::Result<T, ConvertError>;
