// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::bundle::export_bundle;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::event::NormalizedEvent;
use crate::models::report::Report;
use std::path::Path;

/// High-level export entry points used by the CLI commands.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the full (already filtered) report in the requested format.
    pub fn export(report: &Report, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = absolute(file)?;
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(report, path),
            ExportFormat::Json => export_json(report, path),
            ExportFormat::Xlsx => export_xlsx(report, path),
        }
    }

    /// Write the per-worker ZIP bundle for the (already filtered) events.
    pub fn bundle(events: &[NormalizedEvent], file: &str, force: bool) -> AppResult<()> {
        let path = absolute(file)?;
        ensure_writable(path, force)?;
        export_bundle(events, path)
    }
}

fn absolute(file: &str) -> AppResult<&Path> {
    let path = Path::new(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}
