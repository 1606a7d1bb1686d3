//! Error types for pf2tw.
//!
//! All operations return `Result<T>` which aliases `Result<T, ConvertError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from conversion runs.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Root directory does not exist.
    #[error("Directory not found: {0}")]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Invalid class prefix.
    #[error("Invalid prefix '{0}': {1}")]
    InvalidPrefix(String, String),

    /// Source file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rewritten content could not be written back.
    ///
    /// The file may be left truncated; writes are not atomic.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failed during traversal.
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] ignore::Error),

    /// A normalization rule did not compile.
    #[error("Invalid normalization rule '{pattern}': {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A bundled class table is malformed (indicates bug).
    #[error("Class table error: {0}")]
    Asset(#[from] serde_json::Error),

    /// Terminal I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pf2tw operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
