//! Delimited-text ingestion. The terminal exports carry a free-form
//! preamble above the real header (7 rows in the original workbook);
//! `Config.header_row` says which 1-based row is the header.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::raw::{Header, RawEvent};
use std::path::Path;

/// Read the export into its header plus the raw data rows.
pub fn read_raw(path: &Path, cfg: &Config) -> AppResult<(Header, Vec<RawEvent>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(cfg.delimiter_byte())
        .from_path(path)?;

    let mut records = reader.records();

    // skip the preamble rows above the header
    for _ in 1..cfg.header_row {
        if records.next().is_none() {
            return Err(AppError::EmptyInput(path.display().to_string()));
        }
    }

    let header_record = match records.next() {
        Some(r) => r?,
        None => return Err(AppError::EmptyInput(path.display().to_string())),
    };

    let header = Header {
        columns: header_record.iter().map(|c| c.trim().to_string()).collect(),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let values: Vec<String> = record.iter().map(|c| c.to_string()).collect();

        // trailing blank rows are common in hand-edited exports
        if values.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        rows.push(RawEvent { values });
    }

    Ok((header, rows))
}
