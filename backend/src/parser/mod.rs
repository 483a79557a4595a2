//! Collection sheet reader with encoding and delimiter auto-detection.
//!
//! Turns a CSV file into positional raw rows. Every line is kept, header
//! rows included; deciding which rows describe a collection is the job of
//! [`crate::transform::row`].

use std::path::Path;

use crate::error::{SheetError, SheetResult};
use crate::transform::row::RawRow;

/// Result of reading a sheet, with the settings that were used
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// One entry per line, cells in column order
    pub rows: Vec<RawRow>,
    /// Detected encoding
    pub encoding: String,
    /// Detected or requested delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding.
///
/// Bytes that are not valid UTF-8 under a UTF-8 label are read as
/// Windows-1252, the usual encoding of spreadsheet exports.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        },
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    };

    decoded.trim_start_matches('\u{feff}').to_string()
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Ties and lines without any candidate resolve to a comma.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Split CSV text into raw rows.
///
/// Rows may have any number of cells. Empty cells are absent.
pub fn parse_rows(content: &str, delimiter: char) -> SheetResult<Vec<RawRow>> {
    if !delimiter.is_ascii() {
        return Err(SheetError::Delimiter(delimiter));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = record
            .iter()
            .map(|cell| if cell.is_empty() { None } else { Some(cell.to_string()) })
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(SheetError::Empty);
    }

    Ok(rows)
}

/// Read a sheet from bytes, detecting the encoding and, unless given, the delimiter.
pub fn parse_sheet_bytes(bytes: &[u8], delimiter: Option<char>) -> SheetResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let rows = parse_rows(&content, delimiter)?;

    Ok(ParseResult {
        rows,
        encoding,
        delimiter,
    })
}

/// Read a sheet file.
///
/// # Example
/// ```ignore
/// let result = parse_sheet_file("collections.csv", None)?;
/// println!("{} rows, delimiter '{}'", result.rows.len(), result.delimiter);
/// ```
pub fn parse_sheet_file<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> SheetResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| SheetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_sheet_bytes(&bytes, delimiter)
}
