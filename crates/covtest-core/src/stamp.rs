// crates/covtest-core/src/stamp.rs

use chrono::{DateTime, Utc};
use polars::prelude::*;

use crate::error::Result;
use crate::schema::LoadZone;

/// Append the load-timestamp column: one identical instant for every row,
/// recording when this pipeline run processed the file. The instant is
/// injected by the caller so runs are deterministic under test, and the
/// column always carries an explicit zone; the legacy script's naive
/// local-time stamp is not reproduced.
pub fn stamp_load_time(
    df: DataFrame,
    column: &str,
    now_utc: DateTime<Utc>,
    zone: LoadZone,
) -> Result<DataFrame> {
    let tz = match zone {
        LoadZone::Utc => TimeZone::UTC,
        LoadZone::Civil(civil) => unsafe { TimeZone::from_static(civil.name()) },
    };

    let micros = vec![now_utc.timestamp_micros(); df.height()];
    let stamp = Series::new(column.into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, Some(tz)))?;

    let mut df = df;
    df.with_column(stamp)?;
    Ok(df)
}
