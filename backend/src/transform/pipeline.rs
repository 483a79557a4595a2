//! Row-to-record pipeline.
//!
//! Combines row parsing, record building and batching:
//!
//! ```text
//! raw rows → parse_row → (skip) → RecordBuilder::build → Batch → records
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use sheetload::{convert_rows, ConvertOptions};
//!
//! let rows = vec![vec![Some("Smith Papers".to_string()), Some("MS 123".to_string())]];
//! let result = convert_rows(rows, &ConvertOptions::default());
//! assert_eq!(result.records[0].id_0.as_deref(), Some("MS 123"));
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::env;

use super::batch::Batch;
use super::record::RecordBuilder;
use super::row::{parse_row, RawRow, SkipReason};
use crate::models::ResourceRecord;

/// Repository used in import references when none is configured.
pub const DEFAULT_REPOSITORY_ID: u32 = 12345;

/// Environment variable for [`ConvertOptions::repository_id`].
pub const REPOSITORY_ID_VAR: &str = "SHEETLOAD_REPOSITORY_ID";

/// Environment variable for [`ConvertOptions::rights_start_date`].
pub const START_DATE_VAR: &str = "SHEETLOAD_RIGHTS_START_DATE";

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Repository the import references point into
    pub repository_id: u32,

    /// Start date of every rights statement (today when unset)
    pub rights_start_date: Option<NaiveDate>,

    /// Sheet delimiter (auto-detect when unset)
    pub delimiter: Option<char>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            repository_id: DEFAULT_REPOSITORY_ID,
            rights_start_date: None,
            delimiter: None,
        }
    }
}

impl ConvertOptions {
    /// Defaults overridden by `SHEETLOAD_*` variables, `.env` included.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` yields. Malformed values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(id) = lookup(REPOSITORY_ID_VAR).and_then(|v| v.trim().parse().ok()) {
            options.repository_id = id;
        }
        if let Some(date) = lookup(START_DATE_VAR).and_then(|v| v.trim().parse().ok()) {
            options.rights_start_date = Some(date);
        }

        options
    }

    /// Rights start date for this run.
    pub fn start_date(&self) -> NaiveDate {
        self.rights_start_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn record_builder(&self) -> RecordBuilder {
        RecordBuilder::new(self.repository_id, self.start_date())
    }
}

/// A row that produced no record
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the sheet
    pub row: usize,
    pub reason: SkipReason,
}

/// Result of converting a set of rows
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Records in sheet row order
    pub records: Vec<ResourceRecord>,
    /// Rows that were not collections
    pub skipped: Vec<SkippedRow>,
}

impl ConversionResult {
    pub fn summary(&self) -> String {
        format!(
            "Converted: {} records, {} rows skipped",
            self.records.len(),
            self.skipped.len()
        )
    }
}

/// Build a record for every usable row into `batch`, top to bottom.
///
/// Returns the rows that were skipped.
pub fn fill_batch<I>(rows: I, builder: &RecordBuilder, batch: &mut Batch) -> Vec<SkippedRow>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut skipped = Vec::new();

    for (idx, raw) in rows.into_iter().enumerate() {
        match parse_row(&raw) {
            Ok(row) => batch.add(builder.build(&row)),
            Err(reason) => skipped.push(SkippedRow { row: idx + 1, reason }),
        }
    }

    skipped
}

/// Convert raw rows into resource records.
pub fn convert_rows<I>(rows: I, options: &ConvertOptions) -> ConversionResult
where
    I: IntoIterator<Item = RawRow>,
{
    let mut batch = Batch::new();
    let skipped = fill_batch(rows, &options.record_builder(), &mut batch);

    ConversionResult {
        records: batch.flush(),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::row::{Column, COLUMN_COUNT};
    use std::collections::HashMap;

    fn sheet_row(fields: &[(Column, &str)]) -> RawRow {
        let mut raw: RawRow = vec![None; COLUMN_COUNT];
        for (column, value) in fields {
            raw[column.index()] = Some(value.to_string());
        }
        raw
    }

    fn header_row() -> RawRow {
        Column::ALL
            .iter()
            .map(|c| Some(if *c == Column::Title { "Title".to_string() } else { c.name().to_string() }))
            .collect()
    }

    fn fixed_options() -> ConvertOptions {
        ConvertOptions {
            rights_start_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            ..ConvertOptions::default()
        }
    }

    fn without_uri(mut records: Vec<ResourceRecord>) -> Vec<ResourceRecord> {
        for record in &mut records {
            record.uri.clear();
        }
        records
    }

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.repository_id, 12345);
        assert!(opts.rights_start_date.is_none());
        assert!(opts.delimiter.is_none());
    }

    #[test]
    fn test_options_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (REPOSITORY_ID_VAR, " 7 "),
            (START_DATE_VAR, "2023-12-01"),
        ]
        .into_iter()
        .collect();

        let opts = ConvertOptions::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(opts.repository_id, 7);
        assert_eq!(opts.start_date(), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }

    #[test]
    fn test_malformed_env_values_ignored() {
        let opts = ConvertOptions::from_lookup(|k| match k {
            REPOSITORY_ID_VAR => Some("twelve".to_string()),
            START_DATE_VAR => Some("01/12/2023".to_string()),
            _ => None,
        });
        assert_eq!(opts, ConvertOptions::default());
    }

    #[test]
    fn test_records_in_sheet_order_with_skips() {
        let rows = vec![
            header_row(),
            sheet_row(&[(Column::Title, "First Papers"), (Column::ResourceId, "MS 1")]),
            vec![None, Some("  ".to_string())],
            sheet_row(&[(Column::ResourceId, "MS 2")]),
            sheet_row(&[(Column::Title, "Second Papers"), (Column::ResourceId, "MS 3")]),
        ];

        let result = convert_rows(rows, &fixed_options());

        let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First Papers", "Second Papers"]);
        assert_eq!(
            result.skipped,
            vec![
                SkippedRow { row: 1, reason: SkipReason::PlaceholderTitle },
                SkippedRow { row: 3, reason: SkipReason::Blank },
                SkippedRow { row: 4, reason: SkipReason::MissingTitle },
            ]
        );
        assert_eq!(result.summary(), "Converted: 2 records, 3 rows skipped");
    }

    #[test]
    fn test_identifier_always_four_slots() {
        let rows = vec![
            sheet_row(&[(Column::Title, "A"), (Column::ResourceId, "MS 1")]),
            sheet_row(&[(Column::Title, "B")]),
        ];
        for record in convert_rows(rows, &fixed_options()).records {
            let id = record.identifier();
            assert_eq!(id.len(), 4);
            assert!(id[1..].iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_rights_start_date_from_options() {
        let result = convert_rows(vec![sheet_row(&[(Column::Title, "A")])], &fixed_options());
        assert_eq!(
            result.records[0].rights_statements[0].start_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let rows = vec![
            sheet_row(&[
                (Column::Title, "Smith Papers"),
                (Column::ResourceId, "MS 123"),
                (Column::DateExpression, "1950-1960"),
                (Column::NoteArrangement, "By series"),
                (Column::UseConditions, "No copying"),
            ]),
            sheet_row(&[(Column::Title, "Jones Papers"), (Column::LangMaterials, "wel")]),
        ];

        let first = convert_rows(rows.clone(), &fixed_options());
        let second = convert_rows(rows, &fixed_options());

        assert_ne!(first.records[0].uri, second.records[0].uri);
        assert_eq!(without_uri(first.records), without_uri(second.records));
    }

    #[test]
    fn test_no_rows() {
        let result = convert_rows(Vec::<RawRow>::new(), &fixed_options());
        assert!(result.records.is_empty());
        assert!(result.skipped.is_empty());
    }
}
