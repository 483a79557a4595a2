//! Transformation module.
//!
//! This module turns collection sheet rows into resource records:
//! - Row: positional cells to named fields, skip rules
//! - Dates: day-first date normalization
//! - Notes: note column table and composition
//! - Rights: donor rights statement
//! - Record: resource record assembly
//! - Batch: ordered record accumulation
//! - Pipeline: rows to records, run options

pub mod batch;
pub mod dates;
pub mod notes;
pub mod pipeline;
pub mod record;
pub mod rights;
pub mod row;

pub use batch::Batch;
pub use dates::{convert_date_format, normalize, parse_partial_date, DateMatch};
pub use notes::{compose, NoteSpec, NOTE_SPECS};
pub use pipeline::*;
pub use record::RecordBuilder;
pub use row::{parse_row, Column, FieldRow, RawRow, SkipReason, COLUMN_COUNT};
