//! Error types for the Sheetload conversion pipeline.
//!
//! - [`SheetError`] - reading a collection sheet into rows
//! - [`OutputError`] - handing finished records to a sink
//! - [`ConverterError`] - host registration lookups
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Rows that are blank or carry a header/placeholder title are not errors:
//! they surface as [`crate::transform::SkipReason`] values instead.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Sheet Reading Errors
// =============================================================================

/// Errors while reading a collection sheet into raw rows.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failed to read the source file.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimiter cannot be used by the CSV reader.
    #[error("Unsupported delimiter '{0}': must be a single-byte character")]
    Delimiter(char),

    /// Malformed CSV.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// The sheet contains no lines at all.
    #[error("Collection sheet is empty")]
    Empty,
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while handing records to an output sink.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the output file.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Converter Errors
// =============================================================================

/// Errors from converter lookup.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// No converter declares this import type.
    #[error("Unknown import type: {0}")]
    UnknownType(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors for a conversion run.
///
/// Any of these aborts the whole run; there is no per-row recovery.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading the sheet failed.
    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Writing the output failed.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Converter lookup failed.
    #[error("Converter error: {0}")]
    Converter(#[from] ConverterError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for sheet reading.
pub type SheetResult<T> = Result<T, SheetError>;

/// Result type for output sinks.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for a whole conversion run.
pub type PipelineResult<T> = Result<T, PipelineError>;
