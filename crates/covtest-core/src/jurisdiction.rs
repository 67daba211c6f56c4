// crates/covtest-core/src/jurisdiction.rs

use polars::prelude::*;

use crate::error::Result;
use crate::schema::JURISDICTIONS;

/// Strip the asterisk footnote marker from Ontario's row: the literal value
/// `ON*` becomes `ON`. Exact match only; values merely containing `*` are
/// left alone.
pub fn normalize(df: DataFrame, column: &str) -> Result<DataFrame> {
    let df = df
        .lazy()
        .with_column(
            when(col(column).eq(lit("ON*")))
                .then(lit("ON"))
                .otherwise(col(column))
                .alias(column),
        )
        .collect()?;
    Ok(df)
}

/// Keep only rows whose jurisdiction code is in the fixed allow-list. Stray
/// footnote and blank rows are dropped silently; this is cleaning, not
/// validation. Must run after `normalize`, or the starred Ontario row is
/// lost.
pub fn filter_known(df: DataFrame, column: &str) -> Result<DataFrame> {
    let codes = df.column(column)?.as_materialized_series().str()?.clone();
    let mask: BooleanChunked = codes
        .into_iter()
        .map(|value| Some(value.is_some_and(|code| JURISDICTIONS.contains(&code))))
        .collect();
    Ok(df.filter(&mask)?)
}
