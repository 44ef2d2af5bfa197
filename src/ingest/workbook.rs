use super::parse_error;
use crate::errors::AppResult;
use crate::utils::excel_date::{excel_serial_to_text, iso_datetime_to_text, iso_duration_to_text};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Header + rows of the first worksheet. Fully blank rows are skipped.
pub(super) fn read_workbook(path: &Path) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
    let mut workbook = open_workbook_auto(path).map_err(|e| parse_error(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| parse_error(path, "workbook has no worksheet"))?
        .map_err(|e| parse_error(path, e))?;

    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(first) => first.iter().map(cell_to_text).collect(),
        None => return Err(parse_error(path, "worksheet is empty")),
    };

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(parse_error(path, "no header row"));
    }

    let body = rows
        .map(|r| r.iter().map(cell_to_text).collect::<Vec<String>>())
        .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
        .collect();

    Ok((headers, body))
}

/// Text as the cell would be displayed, so that the normalizer sees the same
/// values regardless of the source format.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_text(dt.as_f64()).unwrap_or_default(),
        Data::DateTimeIso(s) => iso_datetime_to_text(s).unwrap_or_else(|| s.clone()),
        Data::DurationIso(s) => iso_duration_to_text(s).unwrap_or_else(|| s.clone()),
    }
}
