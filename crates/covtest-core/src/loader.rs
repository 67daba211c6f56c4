// crates/covtest-core/src/loader.rs

use std::path::Path;

use polars::prelude::*;

use crate::error::Result;

/// Load a report CSV into a DataFrame.
///
/// `footer_rows` is the exact count of trailing non-data lines the report
/// generator appends; they are sliced off before any typing. The count is a
/// contract with the upstream report format, not something we detect.
///
/// When `column_types` is non-empty, schema inference is disabled (every
/// column reads as text), the footer is dropped, and each declared column is
/// strict-cast to its dtype. Leftover footer garbage in a declared numeric
/// column therefore fails the load instead of silently polluting the output.
pub fn load_report(
    path: &Path,
    column_types: &[(&str, DataType)],
    footer_rows: usize,
) -> Result<DataFrame> {
    let mut options = CsvReadOptions::default().with_has_header(true);
    if !column_types.is_empty() {
        options = options.with_infer_schema_length(Some(0));
    }

    let df = options
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let mut df = strip_footer(df, footer_rows);

    for (name, dtype) in column_types {
        let casted = df
            .column(name)?
            .as_materialized_series()
            .strict_cast(dtype)?;
        df.replace(name, casted)?;
    }

    Ok(df)
}

fn strip_footer(df: DataFrame, footer_rows: usize) -> DataFrame {
    if footer_rows == 0 {
        return df;
    }
    let keep = df.height().saturating_sub(footer_rows);
    df.slice(0, keep)
}
