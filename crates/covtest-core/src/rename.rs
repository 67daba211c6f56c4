// crates/covtest-core/src/rename.rs

use polars::prelude::*;

use crate::error::Result;

/// Relabel headers according to a fixed source -> target map. Values are
/// untouched. The rename runs through the lazy API so the plan schema stays
/// in sync for downstream stages. Map sources that are not present are
/// skipped (non-strict), making the pass idempotent: a second run over its
/// own output finds no source headers left to rename.
pub fn rename_columns(df: DataFrame, map: &[(&str, &str)]) -> Result<DataFrame> {
    let sources: Vec<&str> = map.iter().map(|(source, _)| *source).collect();
    let targets: Vec<&str> = map.iter().map(|(_, target)| *target).collect();
    let df = df.lazy().rename(sources, targets, false).collect()?;
    Ok(df)
}
