//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError to keep the error
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

    // ---------------------------
    // Ingestion
    // ---------------------------
    #[error("Cannot read '{file}' as a table: {cause}")]
    Parse { file: String, cause: String },

    #[error(
        "Missing required column(s): {}. Detected columns: {}. Expected: NAMAUSER, TANGGAL, JAM, PROGRAM (LOKASI optional)",
        .missing.join(", "),
        .detected.join(", ")
    )]
    Schema {
        missing: Vec<String>,
        detected: Vec<String>,
    },

    #[error("Column {column} has no interpretable value (expected format: {expected})")]
    FieldCoercion { column: String, expected: String },

    // ---------------------------
    // Parsing of user input
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
