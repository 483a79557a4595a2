//! Host-facing converter for collection sheets.
//!
//! Declares the import type a host uses to pick this converter, reads the
//! sheet, and hands the finished batch to an output sink. All run logging
//! happens here; the transformation engine stays silent.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ConverterError, PipelineResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning, log_warning_indent};
use crate::output::RecordSink;
use crate::parser::parse_sheet_file;
use crate::transform::{fill_batch, Batch, ConvertOptions, SkipReason, SkippedRow};

/// Import type name of the collection sheet converter.
pub const BASIC_RESOURCE_TYPE: &str = "basic_resource";

const BASIC_RESOURCE_DESCRIPTION: &str = "Paper Collection Sheets CSV";

const BASIC_RESOURCE_PROFILE: &str = "Convert a Paper Collection Sheets CSV to ArchivesSpace Resource records";

/// An import type a converter declares to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportType {
    pub name: &'static str,
    pub description: &'static str,
}

/// What a run read and produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub encoding: String,
    pub delimiter: char,
    pub row_count: usize,
    pub record_count: usize,
    pub skipped_count: usize,
}

/// Converts a collection sheet into collection-level resource records.
#[derive(Debug)]
pub struct BasicResourceConverter {
    input: PathBuf,
    options: ConvertOptions,
    batch: Batch,
    skipped: Vec<SkippedRow>,
}

impl BasicResourceConverter {
    /// Converter for `import_type`, or `None` when the type is not ours.
    pub fn instance_for(import_type: &str, input: impl AsRef<Path>, options: ConvertOptions) -> Option<Self> {
        if import_type != BASIC_RESOURCE_TYPE {
            return None;
        }
        Some(Self {
            input: input.as_ref().to_path_buf(),
            options,
            batch: Batch::new(),
            skipped: Vec::new(),
        })
    }

    pub fn import_types() -> Vec<ImportType> {
        vec![ImportType {
            name: BASIC_RESOURCE_TYPE,
            description: BASIC_RESOURCE_DESCRIPTION,
        }]
    }

    pub fn profile() -> &'static str {
        BASIC_RESOURCE_PROFILE
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Rows skipped by the last run.
    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Records built and not yet written.
    pub fn pending(&self) -> usize {
        self.batch.len()
    }

    /// Read the sheet and build a record for every collection row.
    ///
    /// Any read failure aborts the run.
    pub fn run(&mut self) -> PipelineResult<RunSummary> {
        log_info(format!("📖 Reading collection sheet: {}", self.input.display()));
        let parsed = parse_sheet_file(&self.input, self.options.delimiter)?;
        log_success(format!("Detected encoding: {}", parsed.encoding));
        log_success(format!("Delimiter: '{}'", format_delimiter(parsed.delimiter)));
        log_success(format!("Read {} rows", parsed.rows.len()));

        let row_count = parsed.rows.len();
        let builder = self.options.record_builder();
        let before = self.batch.len();
        self.skipped = fill_batch(parsed.rows, &builder, &mut self.batch);
        let record_count = self.batch.len() - before;

        report_skipped(&self.skipped);
        log_success(format!("{} resource records", record_count));

        Ok(RunSummary {
            encoding: parsed.encoding,
            delimiter: parsed.delimiter,
            row_count,
            record_count,
            skipped_count: self.skipped.len(),
        })
    }

    /// Hand every pending record to `sink` in sheet order.
    ///
    /// Records stay pending until the sink accepts them, so a failed write
    /// can be retried.
    pub fn write(&mut self, sink: &mut dyn RecordSink) -> PipelineResult<usize> {
        sink.write_records(self.batch.records())?;
        Ok(self.batch.flush().len())
    }
}

/// Every import type known to this crate.
pub fn import_types() -> Vec<ImportType> {
    BasicResourceConverter::import_types()
}

/// Find the converter for `import_type`.
pub fn lookup(
    import_type: &str,
    input: impl AsRef<Path>,
    options: ConvertOptions,
) -> Result<BasicResourceConverter, ConverterError> {
    BasicResourceConverter::instance_for(import_type, input, options)
        .ok_or_else(|| ConverterError::UnknownType(import_type.to_string()))
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}

/// Log skipped rows grouped by reason, header rows quietly.
fn report_skipped(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        return;
    }

    let mut reasons: HashMap<SkipReason, Vec<usize>> = HashMap::new();
    for skip in skipped {
        reasons.entry(skip.reason).or_default().push(skip.row);
    }

    log_warning(format!("{} rows skipped", skipped.len()));
    let mut reasons: Vec<_> = reasons.into_iter().collect();
    reasons.sort_by_key(|(_, rows)| rows[0]);

    for (reason, rows) in reasons {
        let sample: Vec<String> = rows.iter().take(5).map(|r| r.to_string()).collect();
        let more = if rows.len() > 5 { format!(" ... +{}", rows.len() - 5) } else { String::new() };
        let line = format!("• {} (rows: {}{})", reason.describe(), sample.join(", "), more);
        match reason {
            SkipReason::PlaceholderTitle | SkipReason::HeaderMarker => log_info_indent(line, 1),
            SkipReason::Blank | SkipReason::MissingTitle => log_warning_indent(line, 1),
        }
    }
}
