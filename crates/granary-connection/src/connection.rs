//! Engine-facing connection trait.

use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, SchemaRef};

use crate::error::Result;
use crate::format::ReadFormat;

/// A storage backend the reader can check, list, and read through.
///
/// Implementations delegate all parsing and DataFrame construction to the
/// engine; the trait only covers the checks and discovery the wrapper needs
/// before handing over.
pub trait FileDFConnection: Send + Sync {
    /// Human-readable identifier for log messages.
    fn instance_url(&self) -> String;

    /// Verify that a source root exists and is a directory.
    fn check_source(&self, path: &Path) -> Result<()>;

    /// Whether this connection can traverse nested directories.
    fn supports_recursive_listing(&self) -> bool {
        true
    }

    /// Enumerate regular files under `root` with the given extension,
    /// recursing into subdirectories when `recursive` is set.
    ///
    /// Results are sorted by path for deterministic reads.
    fn list_source(&self, root: &Path, recursive: bool, extension: &str) -> Result<Vec<PathBuf>>;

    /// Read the given files through the engine and stack them vertically.
    ///
    /// An empty path list yields an empty DataFrame conforming to the
    /// declared schema.
    fn read_files(
        &self,
        format: &dyn ReadFormat,
        paths: &[PathBuf],
        schema: Option<&SchemaRef>,
    ) -> Result<DataFrame>;
}
