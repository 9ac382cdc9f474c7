//! Unified application error type.
//! All modules (ingest, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input schema
    // ---------------------------
    /// A required column could not be resolved in the input header.
    /// Fatal: nothing downstream can be trusted without it.
    #[error("Missing column '{role}'. Found columns: {found:?}")]
    Schema { role: &'static str, found: Vec<String> },

    #[error("Input file has no header row: {0}")]
    EmptyInput(String),

    // ---------------------------
    // Filter errors
    // ---------------------------
    #[error("Invalid week key (expected YYYY-Www): {0}")]
    InvalidWeek(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
