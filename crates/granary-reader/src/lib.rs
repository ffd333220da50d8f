//! File-to-DataFrame reader.
//!
//! [`FileDFReader`] validates caller-supplied inputs (explicit file lists vs.
//! a configured source directory, relative vs. absolute paths, the recursive
//! flag) and delegates file reading to a
//! [`FileDFConnection`](granary_connection::FileDFConnection). It owns no
//! parsing or DataFrame construction of its own.
//!
//! ```ignore
//! use granary_connection::{CsvFormat, LocalConnection};
//! use granary_reader::FileDFReader;
//!
//! let reader = FileDFReader::new(LocalConnection::new(), CsvFormat::default())
//!     .with_source_path("/data/input");
//! let df = reader.run()?;
//! ```

pub mod error;
pub mod options;
pub mod reader;

pub use error::{ReaderError, Result};
pub use options::ReaderOptions;
pub use reader::{FileDFReader, resolve_file_paths};
