//! CSV input handling for the survey results file.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use polars::prelude::*;

/// Reads the survey results CSV into a `DataFrame`, inferring the schema from
/// the header row. Columns beyond the grouping and metric columns are carried
/// through and ignored downstream. A missing or unreadable file propagates as
/// an error annotated with the path.
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .with_context(|| format!("Failed to read results CSV: {}", path.display()))?;
    debug!("Loaded {} rows from {}", df.height(), path.display());
    Ok(df)
}
