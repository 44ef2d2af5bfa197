// src/export/csv_cache.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DetailRow, DetailTable};
use std::collections::HashMap;
use std::io;

/// Memoized CSV encoding of detail tables.
///
/// Encoding is a pure function of the table, so entries never need
/// invalidating: the key is the table itself.
#[derive(Debug, Default)]
pub struct CsvCache {
    entries: HashMap<DetailTable, Vec<u8>>,
}

impl CsvCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// UTF-8 CSV with header row and no index column.
    pub fn encode(&mut self, table: &DetailTable) -> AppResult<&[u8]> {
        if !self.entries.contains_key(table) {
            log::debug!("csv cache miss ({} rows)", table.len());
            let bytes = encode_csv(table)?;
            self.entries.insert(table.clone(), bytes);
        } else {
            log::debug!("csv cache hit ({} rows)", table.len());
        }

        self.entries
            .get(table)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::Export("csv cache entry vanished".into()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn encode_csv(table: &DetailTable) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(table.headers())?;
    for row in &table.rows {
        wtr.write_record(table.row_values(row))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))
}

/// Parse an exported detail CSV back into rows.
pub fn decode_csv(bytes: &[u8]) -> AppResult<Vec<DetailRow>> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
