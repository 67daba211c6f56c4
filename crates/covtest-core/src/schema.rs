// crates/covtest-core/src/schema.rs
//
// Constant lookup tables for the PHAC testing report: both target naming
// vocabularies, the jurisdiction allow-list, and the timezone abbreviation
// map share one pipeline skeleton via the `ReportVariant` descriptors.

use chrono_tz::Tz;
use polars::prelude::DataType;

/// Source header -> warehouse field names (snake_case vocabulary).
pub const RENAME_SNAKE: &[(&str, &str)] = &[
    ("Jurisdiction", "jurisdiction"),
    ("# Patients Tested", "num_pat_tested"),
    ("# Confirmed Positive", "num_confirmed_pos"),
    ("# Confirmed Negative", "num_confirmed_neg"),
    ("Change in # Patients Tested", "change_pat_tested"),
    ("Change in # Confirmed Positive", "change_confirmed_pos"),
    ("Change in # Confirmed Negative", "change_confirmed_neg"),
    (
        "Jurisdictional and Canadian % Positivity Rates",
        "jurisdictional_canada_pos_rt",
    ),
    ("Patients Tested per 10^{0} Canadians", "tests_per_capita_canada"),
    (
        "Patients Tested per 10^{0} by Jurisdiction",
        "tests_per_capita_jurisdiction",
    ),
    ("Date Last Updated", "update_date"),
];

/// Source header -> database field names (PascalCase vocabulary).
pub const RENAME_PASCAL: &[(&str, &str)] = &[
    ("Jurisdiction", "Jurisdiction"),
    ("# Patients Tested", "NumPatientsTested"),
    ("# Confirmed Positive", "NumConfirmedPositive"),
    ("# Confirmed Negative", "NumConfirmedNegative"),
    ("Change in # Patients Tested", "ChangePatientsTested"),
    ("Change in # Confirmed Positive", "ChangeConfirmedPositive"),
    ("Change in # Confirmed Negative", "ChangeConfirmedNegative"),
    (
        "Jurisdictional and Canadian % Positivity Rates",
        "PositivityRates",
    ),
    ("Patients Tested per 10^{0} Canadians", "TestsPerCapitaCanada"),
    (
        "Patients Tested per 10^{0} by Jurisdiction",
        "TestsPerCapitaJurisdiction",
    ),
    ("Date Last Updated", "DateUpdated"),
];

/// The 13 province/territory codes plus the national aggregate row.
pub const JURISDICTIONS: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT", "Total",
];

/// Timezone abbreviations seen in report revisions, resolved to fixed UTC
/// offsets (seconds east). Abbreviations are ambiguous in general; this table
/// pins them to the Canadian reading so parsing stays deterministic.
pub const TIMEZONE_ABBREVIATIONS: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("NST", -(3 * 3600 + 1800)),
    ("NDT", -(2 * 3600 + 1800)),
    ("AST", -4 * 3600),
    ("ADT", -3 * 3600),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
];

/// Zone attached to the load-timestamp column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadZone {
    Utc,
    Civil(Tz),
}

/// Everything that differs between the two report transforms. The pipeline
/// itself is shared; each variant is one of these descriptors.
pub struct ReportVariant {
    pub name: &'static str,
    pub rename_map: &'static [(&'static str, &'static str)],
    /// Post-rename name of the jurisdiction column.
    pub jurisdiction_column: &'static str,
    /// Post-rename name of the source-update timestamp column.
    pub update_column: &'static str,
    /// Name of the appended load-timestamp column.
    pub load_column: &'static str,
    /// Exact count of trailing non-data rows emitted by the report generator.
    pub footer_rows: usize,
    /// Strictly-enforced dtypes, keyed by source header. Empty means infer.
    pub column_types: &'static [(&'static str, DataType)],
    pub filter_jurisdictions: bool,
    /// Abbreviation assumed for update timestamps that carry no zone of
    /// their own. None leaves them naive.
    pub assumed_update_zone: Option<&'static str>,
    /// Display zone for the update column once it is zone-aware. Falls back
    /// to UTC when unset.
    pub update_display_zone: Option<&'static str>,
    pub load_zone: LoadZone,
}

/// Warehouse variant: snake_case fields, no declared dtypes, footnote rows
/// cleaned out by the jurisdiction filter.
pub const SNAKE: ReportVariant = ReportVariant {
    name: "snake",
    rename_map: RENAME_SNAKE,
    jurisdiction_column: "jurisdiction",
    update_column: "update_date",
    load_column: "phac_date",
    footer_rows: 0,
    column_types: &[],
    filter_jurisdictions: true,
    assumed_update_zone: None,
    update_display_zone: None,
    load_zone: LoadZone::Utc,
};

/// Database variant: PascalCase fields, strict count typing, the four
/// disclaimer rows skipped by count, update times read as CST.
pub const PASCAL: ReportVariant = ReportVariant {
    name: "pascal",
    rename_map: RENAME_PASCAL,
    jurisdiction_column: "Jurisdiction",
    update_column: "DateUpdated",
    load_column: "DateLoaded",
    footer_rows: 4,
    column_types: &[
        ("# Patients Tested", DataType::Int64),
        ("# Confirmed Positive", DataType::Int64),
        ("# Confirmed Negative", DataType::Int64),
        ("Change in # Patients Tested", DataType::Int64),
        ("Change in # Confirmed Positive", DataType::Int64),
        ("Change in # Confirmed Negative", DataType::Int64),
        ("Patients Tested per 10^{0} Canadians", DataType::Float64),
        ("Patients Tested per 10^{0} by Jurisdiction", DataType::Float64),
    ],
    filter_jurisdictions: false,
    assumed_update_zone: Some("CST"),
    update_display_zone: Some("America/Winnipeg"),
    load_zone: LoadZone::Civil(Tz::America__Winnipeg),
};

/// Resolve a timezone abbreviation to its fixed offset in seconds east.
pub fn abbreviation_offset(abbr: &str) -> Option<i32> {
    TIMEZONE_ABBREVIATIONS
        .iter()
        .find(|(known, _)| *known == abbr)
        .map(|(_, offset)| *offset)
}
