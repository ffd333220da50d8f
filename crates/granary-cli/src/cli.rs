//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "granary",
    version,
    about = "Read files into DataFrames",
    long_about = "Read CSV, NDJSON, or Parquet files into a DataFrame.\n\n\
                  Reads either every matching file under a source directory or an\n\
                  explicit list of files, then prints a per-column summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read files into a DataFrame and print a summary.
    Read(ReadArgs),

    /// List supported file formats.
    Formats,
}

#[derive(Parser)]
pub struct ReadArgs {
    /// Source directory to read from; also resolves relative --file paths.
    #[arg(value_name = "SOURCE_DIR")]
    pub source_path: Option<PathBuf>,

    /// Explicit file to read (repeatable; takes precedence over SOURCE_DIR).
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// File format to read.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Traverse nested directories under the source directory.
    #[arg(long = "recursive")]
    pub recursive: bool,

    /// CSV field separator.
    #[arg(long = "delimiter", default_value = ",")]
    pub delimiter: char,

    /// Treat the first CSV row as data rather than a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Number of leading CSV rows to skip.
    #[arg(long = "skip-rows", default_value_t = 0)]
    pub skip_rows: usize,
}

/// Supported file formats.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Jsonl,
    Parquet,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
