//! Command implementations.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;

use granary_connection::{CsvFormat, JsonLineFormat, LocalConnection, ParquetFormat, ReadFormat};
use granary_reader::{FileDFReader, ReaderOptions};

use crate::cli::{FormatArg, ReadArgs};

/// Result of a `read` command.
pub struct ReadOutcome {
    pub df: DataFrame,
    pub source: String,
    pub format: &'static str,
}

pub fn run_read(args: &ReadArgs) -> Result<ReadOutcome> {
    let format = build_format(args)?;
    let format_name = format.name();

    let mut reader = FileDFReader::new(LocalConnection::new(), format)
        .with_options(ReaderOptions::default().with_recursive(args.recursive));
    if let Some(path) = &args.source_path {
        reader = reader.with_source_path(path);
    }

    let (df, source) = if args.files.is_empty() {
        let source = args
            .source_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let df = reader.run().context("read source directory")?;
        (df, source)
    } else {
        let df = reader
            .run_files(args.files.clone())
            .context("read file list")?;
        (df, format!("{} explicit file(s)", args.files.len()))
    };

    Ok(ReadOutcome {
        df,
        source,
        format: format_name,
    })
}

pub fn run_formats() {
    for (name, extension) in [
        (CsvFormat::default().name(), CsvFormat::default().extension()),
        (JsonLineFormat.name(), JsonLineFormat.extension()),
        (ParquetFormat.name(), ParquetFormat.extension()),
    ] {
        println!("{name} (*.{extension})");
    }
}

fn build_format(args: &ReadArgs) -> Result<Box<dyn ReadFormat>> {
    let format: Box<dyn ReadFormat> = match args.format {
        FormatArg::Csv => {
            let delimiter = u8::try_from(args.delimiter)
                .context("CSV delimiter must be an ASCII character")?;
            Box::new(
                CsvFormat::default()
                    .with_has_header(!args.no_header)
                    .with_delimiter(delimiter)
                    .with_skip_rows(args.skip_rows),
            )
        }
        FormatArg::Jsonl => Box::new(JsonLineFormat),
        FormatArg::Parquet => Box::new(ParquetFormat),
    };
    Ok(format)
}
