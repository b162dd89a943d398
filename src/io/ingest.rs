//! Input loading.
//!
//! This module turns a file of product rows into `RawRecord`s. It performs no
//! field parsing: every row, however malformed, is handed to the pipeline so
//! that skips are counted in one place.
//!
//! Supported layouts:
//! - JSON: an array of rows, each an array of values (strings expected)
//! - CSV: headerless, one row per line, rows may differ in width

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{InputFormat, RawRecord};
use crate::error::AppError;

/// Resolve `InputFormat::Auto` from the file extension.
pub fn resolve_format(format: InputFormat, path: &Path) -> InputFormat {
    match format {
        InputFormat::Auto => {
            let is_csv = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
            if is_csv { InputFormat::Csv } else { InputFormat::Json }
        }
        other => other,
    }
}

/// Load raw rows from a file.
pub fn load_records(path: &Path, format: InputFormat) -> Result<Vec<RawRecord>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open input '{}': {e}", path.display())))?;

    let records = match resolve_format(format, path) {
        InputFormat::Csv => parse_csv_rows(file)?,
        InputFormat::Json | InputFormat::Auto => parse_json_rows(file)?,
    };

    info!(path = %path.display(), rows = records.len(), "loaded input");
    Ok(records)
}

/// Parse a JSON array of rows.
///
/// Non-string cells become `None`; a row that is not an array becomes an empty
/// record (and is later skipped for having too few fields).
pub fn parse_json_rows<R: Read>(reader: R) -> Result<Vec<RawRecord>, AppError> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|e| AppError::io(format!("Invalid input JSON: {e}")))?;

    let Value::Array(rows) = value else {
        return Err(AppError::io("Input JSON must be an array of rows."));
    };

    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| match row {
            Value::Array(cells) => RawRecord::new(cells.into_iter().map(cell_text).collect()),
            _ => {
                debug!(row = idx, "row is not an array");
                RawRecord::default()
            }
        })
        .collect())
}

/// Parse headerless CSV rows.
///
/// A record the CSV reader cannot decode becomes an empty record so the row
/// count stays aligned with the file.
pub fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(r) => records.push(RawRecord::from_texts(r.iter())),
            Err(e) => {
                if e.is_io_error() {
                    return Err(AppError::io(format!("Failed to read input CSV: {e}")));
                }
                debug!(row = idx, error = %e, "CSV parse error");
                records.push(RawRecord::default());
            }
        }
    }
    Ok(records)
}

fn cell_text(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        _ => None,
    }
}
