use crate::errors::{AppError, AppResult};
use crate::models::raw_table::{RawTable, REQUIRED_COLUMNS};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// `" Nama User "` → `"NAMAUSER"`: case and whitespace never matter in headers.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    WHITESPACE.replace_all(trimmed, "").to_uppercase()
}

/// Fail with the list of missing required columns, if any.
pub fn validate(table: &RawTable) -> AppResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(AppError::Schema {
        missing,
        detected: table.headers.clone(),
    })
}
