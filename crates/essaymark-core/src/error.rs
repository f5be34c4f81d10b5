//! Word-list loading errors.
//!
//! The engine itself never fails; the only fallible core surface is reading
//! vocabulary lists from disk. A typed error lets the CLI distinguish a
//! missing file from a malformed one without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a vocabulary word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The file could not be read.
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a flat JSON string array.
    #[error("failed to parse word list {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension is not one the loader understands.
    #[error("unsupported word list format: {path} (expected .json or .txt)")]
    UnsupportedFormat { path: PathBuf },
}
