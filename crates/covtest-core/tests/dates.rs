use chrono::{FixedOffset, NaiveDate, TimeZone as _};
use covtest_core::dates::{parse_report_timestamp, reparse_update_column, ParsedTimestamp};
use covtest_core::TransformError;
use polars::df;
use polars::prelude::*;

fn naive(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("date")
        .and_hms_opt(h, min, s)
        .expect("time")
}

fn cst() -> FixedOffset {
    FixedOffset::west_opt(6 * 3600).expect("offset")
}

#[test]
fn parses_naive_when_no_zone_is_involved() {
    let parsed =
        parse_report_timestamp("2020-05-01 (14:30:00)", "update_date", None).expect("parse");
    assert_eq!(parsed, ParsedTimestamp::Naive(naive(2020, 5, 1, 14, 30, 0)));
}

#[test]
fn assumed_cst_yields_a_different_instant_than_naive_utc() {
    let parsed = parse_report_timestamp("2020-05-01 (14:30:00)", "DateUpdated", Some(cst()))
        .expect("parse");

    let expected = cst()
        .with_ymd_and_hms(2020, 5, 1, 14, 30, 0)
        .single()
        .expect("local time");
    match parsed {
        ParsedTimestamp::Zoned(dt) => {
            assert_eq!(dt, expected);
            let naive_as_utc = naive(2020, 5, 1, 14, 30, 0).and_utc();
            assert_ne!(dt.timestamp(), naive_as_utc.timestamp());
        }
        ParsedTimestamp::Naive(_) => panic!("expected a zone-aware timestamp"),
    }
}

#[test]
fn explicit_abbreviation_overrides_the_assumed_zone() {
    let parsed = parse_report_timestamp("2020-05-01 (14:30:00 CDT)", "DateUpdated", Some(cst()))
        .expect("parse");

    let cdt = FixedOffset::west_opt(5 * 3600).expect("offset");
    let expected = cdt
        .with_ymd_and_hms(2020, 5, 1, 14, 30, 0)
        .single()
        .expect("local time");
    assert_eq!(parsed, ParsedTimestamp::Zoned(expected));
}

#[test]
fn unknown_abbreviation_is_an_explicit_error() {
    let err = parse_report_timestamp("2020-05-01 (14:30:00 XYZ)", "update_date", None)
        .expect_err("should fail");
    assert!(matches!(err, TransformError::UnknownTimezone(_)));
}

#[test]
fn unparseable_text_is_a_timestamp_error() {
    let err = parse_report_timestamp("updated yesterday", "update_date", None)
        .expect_err("should fail");
    assert!(matches!(err, TransformError::Timestamp { .. }));
}

#[test]
fn naive_column_keeps_wall_time_without_a_zone() {
    let df = df![
        "jurisdiction" => ["ON", "QC"],
        "update_date" => ["2020-05-01 (10:00:00)", "2020-05-01 (11:00:00)"],
    ]
    .expect("df");

    let df = reparse_update_column(df, "update_date", None, None).expect("reparse");

    assert_eq!(
        df.column("update_date").expect("column").dtype(),
        &DataType::Datetime(TimeUnit::Microseconds, None)
    );
    let values: Vec<i64> = df
        .column("update_date")
        .expect("column")
        .datetime()
        .expect("datetime")
        .into_no_null_iter()
        .collect();
    assert_eq!(
        values[0],
        naive(2020, 5, 1, 10, 0, 0).and_utc().timestamp_micros()
    );
    assert_eq!(
        values[1],
        naive(2020, 5, 1, 11, 0, 0).and_utc().timestamp_micros()
    );
}

#[test]
fn assumed_zone_produces_utc_normalized_instants() {
    let df = df![
        "DateUpdated" => ["2020-05-01 (14:30:00)"],
    ]
    .expect("df");

    let df = reparse_update_column(df, "DateUpdated", Some("CST"), Some("America/Winnipeg"))
        .expect("reparse");

    assert!(matches!(
        df.column("DateUpdated").expect("column").dtype(),
        DataType::Datetime(TimeUnit::Microseconds, Some(_))
    ));
    let values: Vec<i64> = df
        .column("DateUpdated")
        .expect("column")
        .datetime()
        .expect("datetime")
        .into_no_null_iter()
        .collect();
    // 14:30 at -06:00 is 20:30 UTC
    assert_eq!(
        values[0],
        naive(2020, 5, 1, 20, 30, 0).and_utc().timestamp_micros()
    );
}
