//! Error types for reader input validation.

use std::path::PathBuf;
use thiserror::Error;

use granary_connection::ConnectionError;

/// Errors raised while validating reader inputs.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Nothing to read: no explicit file list and no configured source path.
    #[error("Neither file list nor `source_path` are passed")]
    NoInput,

    /// A relative file path was passed without a source path to resolve it
    /// against.
    #[error("Cannot pass relative file path with empty `source_path`: '{path}'")]
    RelativePathWithoutRoot { path: PathBuf },

    /// An absolute file path lies outside the configured source path.
    #[error("File path '{path}' does not match source_path '{root}'")]
    PathOutsideRoot { path: PathBuf, root: PathBuf },

    /// Recursive listing was requested from a connection that cannot
    /// provide it.
    #[error("connection {connection} does not support recursive listing")]
    RecursiveUnsupported { connection: String },

    /// The connection or engine rejected the request.
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Result type for reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_both_paths() {
        let err = ReaderError::PathOutsideRoot {
            path: PathBuf::from("/other/file.csv"),
            root: PathBuf::from("/data/input"),
        };
        let message = err.to_string();
        assert!(message.contains("/other/file.csv"));
        assert!(message.contains("/data/input"));
    }

    #[test]
    fn test_no_input_message() {
        assert_eq!(
            ReaderError::NoInput.to_string(),
            "Neither file list nor `source_path` are passed"
        );
    }
}
