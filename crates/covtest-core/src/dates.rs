// crates/covtest-core/src/dates.rs
//
// The report's "Date Last Updated" field is free text of the form
// `YYYY-MM-DD (HH:MM:SS)`, with newer revisions appending a timezone
// abbreviation inside the parentheses. This module turns that text into a
// proper datetime column.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone as _};
use polars::prelude::*;

use crate::error::{Result, TransformError};
use crate::schema::abbreviation_offset;

/// One parsed update timestamp. Values without any zone information stay
/// naive; values with an explicit or assumed abbreviation carry their offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    Naive(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse one raw update-timestamp value. Strips the literal parentheses,
/// resolves a trailing timezone abbreviation through the fixed table, and
/// applies `assumed` to values that carry no abbreviation of their own.
pub fn parse_report_timestamp(
    value: &str,
    column: &str,
    assumed: Option<FixedOffset>,
) -> Result<ParsedTimestamp> {
    let stripped: String = value.chars().filter(|c| *c != '(' && *c != ')').collect();
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    // A trailing alphabetic word is only an abbreviation when what precedes
    // it is itself a datetime; otherwise the whole value is one (bad) body
    // and the failure reports as a parse error, not an unknown zone.
    let (body, zone) = match cleaned.rsplit_once(' ') {
        Some((head, tail))
            if tail.chars().all(|c| c.is_ascii_alphabetic()) && parse_naive(head).is_some() =>
        {
            let offset = fixed_offset(tail)?;
            (head, Some(offset))
        }
        _ => (cleaned.as_str(), assumed),
    };

    let naive = parse_naive(body).ok_or_else(|| TransformError::Timestamp {
        column: column.to_string(),
        value: value.to_string(),
    })?;

    match zone {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(ParsedTimestamp::Zoned)
            .ok_or_else(|| TransformError::Timestamp {
                column: column.to_string(),
                value: value.to_string(),
            }),
        None => Ok(ParsedTimestamp::Naive(naive)),
    }
}

/// Replace the text update column with a parsed datetime column.
///
/// The column stays naive when no value involved a zone. As soon as any
/// value is zone-aware, instants are normalized to UTC and the column is
/// attached to `display_zone` (UTC when unset); naive stragglers in that
/// case take the documented UTC fallback rather than a locale guess.
pub fn reparse_update_column(
    df: DataFrame,
    column: &str,
    assumed: Option<&str>,
    display_zone: Option<&'static str>,
) -> Result<DataFrame> {
    let assumed_offset = match assumed {
        Some(abbr) => Some(fixed_offset(abbr)?),
        None => None,
    };

    let raw = df.column(column)?.as_materialized_series().str()?.clone();
    let mut parsed = Vec::with_capacity(raw.len());
    for (row, value) in raw.into_iter().enumerate() {
        let value = value.ok_or_else(|| TransformError::NullValue {
            column: column.to_string(),
            row,
        })?;
        parsed.push(parse_report_timestamp(value, column, assumed_offset)?);
    }

    let any_zoned = parsed
        .iter()
        .any(|stamp| matches!(stamp, ParsedTimestamp::Zoned(_)));
    let micros: Vec<i64> = parsed
        .iter()
        .map(|stamp| match stamp {
            ParsedTimestamp::Zoned(dt) => dt.timestamp_micros(),
            ParsedTimestamp::Naive(dt) => dt.and_utc().timestamp_micros(),
        })
        .collect();

    let dtype = if any_zoned {
        let tz = match display_zone {
            Some(zone) => unsafe { TimeZone::from_static(zone) },
            None => TimeZone::UTC,
        };
        DataType::Datetime(TimeUnit::Microseconds, Some(tz))
    } else {
        DataType::Datetime(TimeUnit::Microseconds, None)
    };

    let mut df = df;
    df.replace(column, Series::new(column.into(), micros))?;
    let df = df
        .lazy()
        .with_column(col(column).cast(dtype))
        .collect()?;
    Ok(df)
}

fn parse_naive(body: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(body, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(body, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn fixed_offset(abbr: &str) -> Result<FixedOffset> {
    let seconds = abbreviation_offset(abbr)
        .ok_or_else(|| TransformError::UnknownTimezone(abbr.to_string()))?;
    FixedOffset::east_opt(seconds).ok_or_else(|| TransformError::UnknownTimezone(abbr.to_string()))
}
