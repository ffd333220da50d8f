//! Local filesystem connection backed by Polars readers.

use std::path::{Path, PathBuf};

use polars::prelude::{DataFrame, SchemaRef};

use crate::connection::FileDFConnection;
use crate::error::{ConnectionError, Result};
use crate::format::{ReadFormat, empty_frame};

/// Connection over the local filesystem.
///
/// Discovery walks the directory tree with `std::fs`; reading and schema
/// handling are delegated to the Polars reader of the requested format.
#[derive(Debug, Clone, Default)]
pub struct LocalConnection;

impl LocalConnection {
    pub fn new() -> Self {
        Self
    }
}

impl FileDFConnection for LocalConnection {
    fn instance_url(&self) -> String {
        "file://localhost".to_string()
    }

    fn check_source(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ConnectionError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(ConnectionError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn list_source(&self, root: &Path, recursive: bool, extension: &str) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_matching(root, recursive, extension, &mut files)?;
        files.sort();
        tracing::debug!(
            root = %root.display(),
            recursive,
            count = files.len(),
            "listed source directory"
        );
        Ok(files)
    }

    fn read_files(
        &self,
        format: &dyn ReadFormat,
        paths: &[PathBuf],
        schema: Option<&SchemaRef>,
    ) -> Result<DataFrame> {
        let mut stacked: Option<DataFrame> = None;
        for path in paths {
            let df = format.read_path(path, schema)?;
            match stacked.as_mut() {
                Some(acc) => {
                    acc.vstack_mut(&df)?;
                }
                None => stacked = Some(df),
            }
        }
        Ok(stacked.unwrap_or_else(|| empty_frame(schema)))
    }
}

fn collect_matching(
    dir: &Path,
    recursive: bool,
    extension: &str,
    out: &mut Vec<PathBuf>,
) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConnectionError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| ConnectionError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            if recursive {
                collect_matching(&path, recursive, extension, out)?;
            }
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            out.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CsvFormat;
    use polars::prelude::{DataType, Field, Schema};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.csv"), "id,name\n2,beta\n").unwrap();
        std::fs::write(dir.path().join("a.csv"), "id,name\n1,alpha\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not data").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/c.csv"), "id,name\n3,gamma\n").unwrap();
        dir
    }

    #[test]
    fn test_check_source_ok() {
        let dir = fixture_dir();
        let conn = LocalConnection::new();
        assert!(conn.check_source(dir.path()).is_ok());
    }

    #[test]
    fn test_check_source_missing() {
        let conn = LocalConnection::new();
        let err = conn
            .check_source(Path::new("/nonexistent/granary/source"))
            .unwrap_err();
        assert!(matches!(err, ConnectionError::PathNotFound { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_check_source_not_a_directory() {
        let dir = fixture_dir();
        let conn = LocalConnection::new();
        let err = conn.check_source(&dir.path().join("a.csv")).unwrap_err();
        assert!(matches!(err, ConnectionError::NotADirectory { .. }));
        assert!(err.to_string().contains("must be a directory"));
    }

    #[test]
    fn test_list_source_flat_is_sorted_and_filtered() {
        let dir = fixture_dir();
        let conn = LocalConnection::new();
        let files = conn.list_source(dir.path(), false, "csv").unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_list_source_recursive_includes_nested() {
        let dir = fixture_dir();
        let conn = LocalConnection::new();
        let files = conn.list_source(dir.path(), true, "csv").unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_read_files_stacks_in_order() {
        let dir = fixture_dir();
        let conn = LocalConnection::new();
        let files = conn.list_source(dir.path(), false, "csv").unwrap();
        let df = conn
            .read_files(&CsvFormat::default(), &files, None)
            .unwrap();
        assert_eq!(df.height(), 2);

        let ids: Vec<i64> = df
            .column("id")
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_read_files_empty_conforms_to_schema() {
        let conn = LocalConnection::new();
        let schema: SchemaRef = Arc::new(Schema::from_iter([
            Field::new("id".into(), DataType::Int64),
            Field::new("name".into(), DataType::String),
        ]));
        let df = conn
            .read_files(&CsvFormat::default(), &[], Some(&schema))
            .unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.schema(), &schema);
    }
}
