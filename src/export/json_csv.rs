// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::csv_cache::CsvCache;
use crate::export::model::DetailTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (array of row objects).
pub(crate) fn export_json(table: &DetailTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&table.rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", table.len(), path);
    Ok(())
}

/// Export CSV through the memoized encoder.
pub(crate) fn export_csv(table: &DetailTable, path: &Path, cache: &mut CsvCache) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let bytes = cache.encode(table)?;

    let mut file = File::create(path)?;
    file.write_all(bytes)?;

    notify_export_success("CSV", table.len(), path);
    Ok(())
}
