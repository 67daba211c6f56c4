// crates/covtest-core/src/pipeline.rs

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;
use tracing::info;

use crate::error::Result;
use crate::schema::ReportVariant;
use crate::{dates, jurisdiction, loader, rename, stamp, writer};

/// Run the whole transform for one report file and write the output CSV
/// next to the input. Returns the output path.
///
/// Stage order is load-bearing: jurisdiction normalization must precede the
/// filter (or the starred Ontario row is dropped), and strict typing happens
/// at load, before any filtering, so a wrong footer count fails loudly
/// instead of leaking garbage rows into the output.
pub fn run(input: &Path, variant: &ReportVariant, now_utc: DateTime<Utc>) -> Result<PathBuf> {
    info!(
        file = %input.display(),
        variant = variant.name,
        "loading report and transforming fields"
    );
    let df = loader::load_report(input, variant.column_types, variant.footer_rows)?;
    let df = transform(df, variant, now_utc)?;

    let output = writer::derived_output_path(input);
    info!(
        rows = df.height(),
        output = %output.display(),
        "transform complete, exporting csv"
    );
    let mut df = df;
    writer::write_report(&mut df, &output)?;
    Ok(output)
}

/// The in-memory portion of the pipeline, separated from file I/O so tests
/// can drive it on constructed frames.
pub fn transform(
    df: DataFrame,
    variant: &ReportVariant,
    now_utc: DateTime<Utc>,
) -> Result<DataFrame> {
    let df = rename::rename_columns(df, variant.rename_map)?;
    let df = jurisdiction::normalize(df, variant.jurisdiction_column)?;
    let df = if variant.filter_jurisdictions {
        jurisdiction::filter_known(df, variant.jurisdiction_column)?
    } else {
        df
    };
    let df = dates::reparse_update_column(
        df,
        variant.update_column,
        variant.assumed_update_zone,
        variant.update_display_zone,
    )?;
    stamp::stamp_load_time(df, variant.load_column, now_utc, variant.load_zone)
}
