//! Error types for connection and engine operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while checking, listing, or reading a source.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Source path not found on the underlying storage.
    #[error("source path {path} does not exist")]
    PathNotFound { path: PathBuf },

    /// Source path resolved to a non-directory entry.
    #[error("source path {path} must be a directory")]
    NotADirectory { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine failed to read or stack a file.
    #[error("engine read failed: {message}")]
    Engine { message: String },
}

impl From<polars::prelude::PolarsError> for ConnectionError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Engine {
            message: err.to_string(),
        }
    }
}

/// Result type for connection operations.
pub type Result<T> = std::result::Result<T, ConnectionError>;
