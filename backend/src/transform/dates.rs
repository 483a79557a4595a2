//! Date normalization for collection sheet dates.
//!
//! Sheets carry dates in day-first order, `15/06/1990`, `06/1990`,
//! `15-06-1990`. These become partial ISO dates (`1990-06-15`, `1990-06`).
//! Anything else is passed through untouched.
//!
//! Matching is whole-value, not a search: `about 15/06/1990` is left as
//! written rather than having the date inside it rewritten. Month and day are
//! always zero-padded, so `1/2/1950` becomes `1950-02-01`, not `1950-2-1`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::models::{DateLabel, DateRange, DateType};

static SLASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d{1,2})/)?(\d{1,2})/(\d{4})$").expect("valid slash date pattern"));

static DASH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d{1,2})-)?(\d{1,2})-(\d{4})$").expect("valid dash date pattern"));

/// Outcome of matching a date string against the day-first patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateMatch {
    Matched { year: u16, month: u8, day: Option<u8> },
    Unmatched(String),
}

impl fmt::Display for DateMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateMatch::Matched { year, month, day: Some(day) } => {
                write!(f, "{:04}-{:02}-{:02}", year, month, day)
            }
            DateMatch::Matched { year, month, day: None } => write!(f, "{:04}-{:02}", year, month),
            DateMatch::Unmatched(original) => f.write_str(original),
        }
    }
}

/// Match `[day/]month/year` or `[day-]month-year` against the whole value.
///
/// Group order decides which number is the day; values are not checked
/// against the calendar.
pub fn parse_partial_date(value: &str) -> DateMatch {
    let trimmed = value.trim();
    let captures = SLASH_DATE
        .captures(trimmed)
        .or_else(|| DASH_DATE.captures(trimmed));

    let matched = captures.and_then(|caps| {
        let day = match caps.get(1) {
            Some(m) => Some(m.as_str().parse::<u8>().ok()?),
            None => None,
        };
        let month = caps.get(2)?.as_str().parse::<u8>().ok()?;
        let year = caps.get(3)?.as_str().parse::<u16>().ok()?;
        Some(DateMatch::Matched { year, month, day })
    });

    matched.unwrap_or_else(|| DateMatch::Unmatched(value.to_string()))
}

/// Rewrite a day-first date as `year-month[-day]`, or return it unchanged.
pub fn convert_date_format(value: &str) -> String {
    parse_partial_date(value).to_string()
}

/// Build the creation date for a row.
///
/// Returns `None` when all three inputs are absent. The date is inclusive
/// when the expression contains a dash or both bounds are given.
pub fn normalize(expression: Option<&str>, begin: Option<&str>, end: Option<&str>) -> Option<DateRange> {
    if expression.is_none() && begin.is_none() && end.is_none() {
        return None;
    }

    let is_range = expression.is_some_and(|e| e.contains('-')) || (begin.is_some() && end.is_some());

    Some(DateRange {
        date_type: if is_range { DateType::Inclusive } else { DateType::Single },
        label: DateLabel::Creation,
        expression: expression.map(String::from),
        begin: begin.map(convert_date_format),
        end: end.map(convert_date_format),
    })
}
