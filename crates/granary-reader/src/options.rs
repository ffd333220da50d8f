//! Reader options forwarded to the connection.

use serde::{Deserialize, Serialize};

/// Options controlling how a source directory is read.
///
/// These are forwarded to the connection verbatim; the reader itself only
/// checks that the connection can honor them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// Traverse nested directories under the source path.
    ///
    /// Off by default: a flat read sees only files directly under the root.
    pub recursive: bool,
}

impl ReaderOptions {
    /// Enable or disable recursive directory traversal.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_non_recursive() {
        assert!(!ReaderOptions::default().recursive);
        assert!(ReaderOptions::default().with_recursive(true).recursive);
    }
}
