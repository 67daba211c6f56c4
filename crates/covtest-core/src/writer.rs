// crates/covtest-core/src/writer.rs

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::error::Result;

/// Derive the output path from the input path: `report.csv` becomes
/// `report_transformed.csv`, keeping the directory and extension.
pub fn derived_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => input.with_file_name(format!("{}_transformed.{}", stem, ext)),
        None => input.with_file_name(format!("{}_transformed", stem)),
    }
}

/// Serialize the transformed dataset as CSV: header row, no index column,
/// columns in their current order. Overwrites any existing file at `path`.
pub fn write_report(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    CsvWriter::new(file).include_header(true).finish(df)?;
    Ok(())
}
