// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv_cache::CsvCache;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DetailTable;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the detail view.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` to `path` in `format`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    /// An empty table is not written at all.
    pub fn export(
        table: &DetailTable,
        format: ExportFormat,
        path: &Path,
        force: bool,
        cache: &mut CsvCache,
    ) -> AppResult<()> {
        if table.is_empty() {
            warning("No rows to export for the selected filters.");
            return Ok(());
        }

        ensure_writable(path, force)?;
        log::debug!(
            "exporting {} rows as {} to {}",
            table.len(),
            format.as_str(),
            path.display()
        );

        match format {
            ExportFormat::Csv => export_csv(table, path, cache)?,
            ExportFormat::Json => export_json(table, path)?,
            ExportFormat::Xlsx => export_xlsx(table, path)?,
        }

        Ok(())
    }
}
