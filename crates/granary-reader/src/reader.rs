//! The FileDFReader: precondition checks, then delegation.

use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, SchemaRef};

use granary_connection::{FileDFConnection, ReadFormat, empty_frame};

use crate::error::{ReaderError, Result};
use crate::options::ReaderOptions;

/// Reads files into a DataFrame through a connection.
///
/// The reader validates its inputs and forwards everything else. Two entry
/// points exist: [`run`](Self::run) reads the configured source directory,
/// [`run_files`](Self::run_files) reads an explicit file list. When both a
/// source path and a file list are supplied, the explicit list wins and a
/// warning is logged.
pub struct FileDFReader<C: FileDFConnection> {
    connection: C,
    format: Box<dyn ReadFormat>,
    source_path: Option<PathBuf>,
    df_schema: Option<SchemaRef>,
    options: ReaderOptions,
}

impl<C: FileDFConnection> FileDFReader<C> {
    pub fn new(connection: C, format: impl ReadFormat + 'static) -> Self {
        Self {
            connection,
            format: Box::new(format),
            source_path: None,
            df_schema: None,
            options: ReaderOptions::default(),
        }
    }

    /// Set the source directory to read from and to resolve relative file
    /// paths against.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Declare the schema the resulting DataFrame must conform to.
    #[must_use]
    pub fn with_schema(mut self, schema: SchemaRef) -> Self {
        self.df_schema = Some(schema);
        self
    }

    /// Set reader options.
    #[must_use]
    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Read every matching file under the configured source path.
    ///
    /// # Errors
    ///
    /// - [`ReaderError::NoInput`] when no source path is configured.
    /// - [`ReaderError::RecursiveUnsupported`] when `recursive` is set but
    ///   the connection cannot traverse nested directories.
    /// - Connection errors when the source path does not exist or is not a
    ///   directory.
    pub fn run(&self) -> Result<DataFrame> {
        let Some(root) = self.source_path.as_deref() else {
            return Err(ReaderError::NoInput);
        };
        if self.options.recursive && !self.connection.supports_recursive_listing() {
            return Err(ReaderError::RecursiveUnsupported {
                connection: self.connection.instance_url(),
            });
        }

        self.connection.check_source(root)?;
        let files =
            self.connection
                .list_source(root, self.options.recursive, self.format.extension())?;
        tracing::debug!(
            source_path = %root.display(),
            format = self.format.name(),
            files = files.len(),
            "reading source directory"
        );

        let df = self.read_resolved(&files)?;
        tracing::info!(
            source_path = %root.display(),
            rows = df.height(),
            "finished reading source directory"
        );
        Ok(df)
    }

    /// Read an explicit list of files.
    ///
    /// Relative paths are resolved against the configured source path;
    /// absolute paths must lie under it when one is configured. An empty
    /// list succeeds without touching storage and yields an empty DataFrame
    /// conforming to the declared schema.
    pub fn run_files<I, P>(&self, files: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let files: Vec<PathBuf> = files.into_iter().map(Into::into).collect();
        if self.source_path.is_some() {
            tracing::warn!(
                "Passed both `source_path` and files list at the same time. \
                 Using explicit files list"
            );
        }
        if files.is_empty() {
            return Ok(empty_frame(self.df_schema.as_ref()));
        }

        let resolved = resolve_file_paths(&files, self.source_path.as_deref())?;
        tracing::debug!(
            format = self.format.name(),
            files = resolved.len(),
            "reading explicit file list"
        );

        let df = self.read_resolved(&resolved)?;
        tracing::info!(rows = df.height(), "finished reading file list");
        Ok(df)
    }

    fn read_resolved(&self, files: &[PathBuf]) -> Result<DataFrame> {
        if files.is_empty() {
            return Ok(empty_frame(self.df_schema.as_ref()));
        }
        let df =
            self.connection
                .read_files(self.format.as_ref(), files, self.df_schema.as_ref())?;
        Ok(df)
    }
}

/// Resolve an explicit file list against an optional source path.
///
/// Relative paths require a source path and are joined onto it. Absolute
/// paths are checked against the source path prefix when one is configured
/// and passed through untouched otherwise. Input order is preserved.
pub fn resolve_file_paths(files: &[PathBuf], source_path: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::with_capacity(files.len());
    for file in files {
        if file.is_relative() {
            let Some(root) = source_path else {
                return Err(ReaderError::RelativePathWithoutRoot { path: file.clone() });
            };
            resolved.push(root.join(file));
        } else {
            if let Some(root) = source_path
                && !file.starts_with(root)
            {
                return Err(ReaderError::PathOutsideRoot {
                    path: file.clone(),
                    root: root.to_path_buf(),
                });
            }
            resolved.push(file.clone());
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_against_root() {
        let files = vec![PathBuf::from("sub/file.csv")];
        let resolved = resolve_file_paths(&files, Some(Path::new("/data/input"))).unwrap();
        assert_eq!(resolved, vec![PathBuf::from("/data/input/sub/file.csv")]);
    }

    #[test]
    fn test_resolve_relative_without_root_fails() {
        let files = vec![PathBuf::from("some/relative/path/file.txt")];
        let err = resolve_file_paths(&files, None).unwrap_err();
        assert!(matches!(err, ReaderError::RelativePathWithoutRoot { .. }));
        assert!(
            err.to_string()
                .contains("Cannot pass relative file path with empty `source_path`")
        );
    }

    #[test]
    fn test_resolve_absolute_outside_root_fails() {
        let files = vec![PathBuf::from("/some/relative/path/file.txt")];
        let err = resolve_file_paths(&files, Some(Path::new("/data/input"))).unwrap_err();
        assert!(matches!(err, ReaderError::PathOutsideRoot { .. }));
    }

    #[test]
    fn test_resolve_absolute_without_root_passes_through() {
        let files = vec![PathBuf::from("/anywhere/file.csv")];
        let resolved = resolve_file_paths(&files, None).unwrap();
        assert_eq!(resolved, files);
    }

    #[test]
    fn test_resolve_mixed_inputs_preserves_order() {
        let files = vec![
            PathBuf::from("/data/input/a.csv"),
            PathBuf::from("b.csv"),
            PathBuf::from("nested/c.csv"),
        ];
        let resolved = resolve_file_paths(&files, Some(Path::new("/data/input"))).unwrap();
        assert_eq!(
            resolved,
            vec![
                PathBuf::from("/data/input/a.csv"),
                PathBuf::from("/data/input/b.csv"),
                PathBuf::from("/data/input/nested/c.csv"),
            ]
        );
    }

    #[test]
    fn test_prefix_check_is_component_wise() {
        // "/data/input-other" shares a string prefix with "/data/input" but
        // is not under it.
        let files = vec![PathBuf::from("/data/input-other/file.csv")];
        let err = resolve_file_paths(&files, Some(Path::new("/data/input"))).unwrap_err();
        assert!(matches!(err, ReaderError::PathOutsideRoot { .. }));
    }
}
