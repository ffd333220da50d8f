//! Storage and engine adapter for granary.
//!
//! This crate owns the seam between the reader wrapper and the underlying
//! DataFrame engine (Polars). It provides the [`FileDFConnection`] trait,
//! a [`LocalConnection`] over the local filesystem, and the [`ReadFormat`]
//! trait with CSV, NDJSON, and Parquet implementations.

pub mod connection;
pub mod error;
pub mod format;
pub mod local;

pub use connection::FileDFConnection;
pub use error::{ConnectionError, Result};
pub use format::{CsvFormat, JsonLineFormat, ParquetFormat, ReadFormat, empty_frame};
pub use local::LocalConnection;
