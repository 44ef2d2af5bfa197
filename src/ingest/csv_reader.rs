use super::parse_error;
use crate::errors::AppResult;
use std::path::Path;

/// Header + rows of a CSV file. Every record must have as many fields as the
/// header, otherwise the whole file is rejected.
pub(super) fn read_csv(path: &Path) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|e| parse_error(path, e))?;

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| parse_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(parse_error(path, "no header row"));
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| parse_error(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok((headers, rows))
}
