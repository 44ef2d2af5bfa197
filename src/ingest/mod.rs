//! Reading the uploaded activity log into a [`RawTable`].
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xls`, `.ods`) go through calamine, `.csv`
//! through the csv crate. Either way the header row is normalized and the
//! required columns are checked before any row is coerced.

mod csv_reader;
pub mod schema;
mod workbook;

use crate::errors::{AppError, AppResult};
use crate::models::raw_table::RawTable;
use std::path::Path;

/// Load and validate the activity table stored at `path`.
pub fn load_table(path: &Path) -> AppResult<RawTable> {
    if !path.exists() {
        return Err(parse_error(path, "file not found"));
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let (headers, rows) = match ext.as_str() {
        "csv" => csv_reader::read_csv(path)?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => workbook::read_workbook(path)?,
        other => {
            return Err(parse_error(
                path,
                format!("unsupported file type '.{other}' (expected .xlsx, .xls, .ods or .csv)"),
            ));
        }
    };

    let table = RawTable {
        headers: headers.iter().map(|h| schema::normalize_header(h)).collect(),
        rows,
    };
    schema::validate(&table)?;

    log::debug!(
        "loaded {} rows, columns: {}",
        table.rows.len(),
        table.headers.join(", ")
    );
    Ok(table)
}

pub(crate) fn parse_error(path: &Path, cause: impl ToString) -> AppError {
    AppError::Parse {
        file: path.display().to_string(),
        cause: cause.to_string(),
    }
}
