//! File formats readable into DataFrames.
//!
//! Each format maps its options onto the corresponding Polars eager reader.
//! The wrapper never parses bytes itself; everything past "open this path"
//! is the engine's job.

use std::path::Path;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A file format the engine can read into a DataFrame.
pub trait ReadFormat: Send + Sync {
    /// Short format name for logs and CLI output (e.g. "csv").
    fn name(&self) -> &'static str;

    /// File extension used when listing a source directory.
    fn extension(&self) -> &'static str;

    /// Read a single file into a DataFrame, enforcing the declared schema
    /// when the format supports it.
    fn read_path(&self, path: &Path, schema: Option<&SchemaRef>) -> PolarsResult<DataFrame>;
}

/// Build an empty DataFrame conforming to the declared schema, if any.
pub fn empty_frame(schema: Option<&SchemaRef>) -> DataFrame {
    match schema {
        Some(schema) => DataFrame::empty_with_schema(schema.as_ref()),
        None => DataFrame::empty(),
    }
}

impl ReadFormat for Box<dyn ReadFormat> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }

    fn read_path(&self, path: &Path, schema: Option<&SchemaRef>) -> PolarsResult<DataFrame> {
        (**self).read_path(path, schema)
    }
}

/// CSV reading options forwarded to the Polars CSV reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvFormat {
    /// Whether the first non-skipped row is a header. Defaults to true.
    pub has_header: bool,

    /// Field separator. Defaults to `,`.
    pub delimiter: u8,

    /// Number of leading rows to skip before parsing.
    pub skip_rows: usize,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            skip_rows: 0,
        }
    }
}

impl CsvFormat {
    /// Set whether the file carries a header row.
    #[must_use]
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the field separator.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the number of leading rows to skip.
    #[must_use]
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }
}

impl ReadFormat for CsvFormat {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn read_path(&self, path: &Path, schema: Option<&SchemaRef>) -> PolarsResult<DataFrame> {
        let parse_options = CsvParseOptions::default().with_separator(self.delimiter);
        CsvReadOptions::default()
            .with_has_header(self.has_header)
            .with_skip_rows(self.skip_rows)
            .with_schema(schema.cloned())
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
    }
}

/// Newline-delimited JSON format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonLineFormat;

impl ReadFormat for JsonLineFormat {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn extension(&self) -> &'static str {
        "jsonl"
    }

    fn read_path(&self, path: &Path, schema: Option<&SchemaRef>) -> PolarsResult<DataFrame> {
        let file = std::fs::File::open(path).map_err(PolarsError::from)?;
        let reader = JsonLineReader::new(file);
        match schema {
            Some(schema) => reader.with_schema(schema.clone()).finish(),
            None => reader.finish(),
        }
    }
}

/// Parquet format. Parquet files carry their own schema, so a declared
/// schema is not forwarded; the engine output is returned as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParquetFormat;

impl ReadFormat for ParquetFormat {
    fn name(&self) -> &'static str {
        "parquet"
    }

    fn extension(&self) -> &'static str {
        "parquet"
    }

    fn read_path(&self, path: &Path, _schema: Option<&SchemaRef>) -> PolarsResult<DataFrame> {
        let file = std::fs::File::open(path).map_err(PolarsError::from)?;
        ParquetReader::new(file).finish()
    }
}
