//! # Sheetload - collection sheet to archival resource conversion
//!
//! Sheetload turns "collection sheet" spreadsheets (one row per archival
//! collection) into collection-level resource records for ArchivesSpace.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│    Sink     │
//! │  (ISO/UTF8) │     │ (raw rows)  │     │  (records)  │     │ (JSON/mem)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheetload::{lookup, ConvertOptions, JsonFileSink, BASIC_RESOURCE_TYPE};
//!
//! let mut converter = lookup(BASIC_RESOURCE_TYPE, "collections.csv", ConvertOptions::from_env())?;
//! converter.run()?;
//! converter.write(&mut JsonFileSink::new("resources.json"))?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Run log for glue code
//! - [`models`] - Resource record shape
//! - [`parser`] - CSV reading with auto-detection
//! - [`transform`] - Rows, dates, notes, rights, records, batching
//! - [`output`] - Record sinks
//! - [`converter`] - Host-facing converter and import type metadata

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Reading
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// Host integration
pub mod converter;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConverterError,
    OutputError,
    PipelineError,
    PipelineResult,
    SheetError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    DateRange,
    DateType,
    Extent,
    ExtentPortion,
    LangMaterial,
    Note,
    NoteKind,
    ResourceRecord,
    RightsNote,
    RightsStatement,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_rows,
    parse_sheet_bytes,
    parse_sheet_file,
    ParseResult,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    compose,
    convert_date_format,
    convert_rows,
    normalize,
    parse_partial_date,
    parse_row,
    Batch,
    Column,
    ConversionResult,
    ConvertOptions,
    DateMatch,
    FieldRow,
    NoteSpec,
    RawRow,
    RecordBuilder,
    SkipReason,
    SkippedRow,
    NOTE_SPECS,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{JsonFileSink, JsonWriterSink, MemorySink, RecordSink};

// =============================================================================
// Re-exports - Converter
// =============================================================================

pub use converter::{
    import_types,
    lookup,
    BasicResourceConverter,
    ImportType,
    RunSummary,
    BASIC_RESOURCE_TYPE,
};
