// src/export/model.rs

use crate::models::record::ActivityRecord;
use serde::{Deserialize, Serialize};

/// One row of the detail view, as shown and as exported.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DetailRow {
    #[serde(rename = "NAMAUSER")]
    pub user: String,
    #[serde(rename = "TANGGAL")]
    pub date: String,
    #[serde(rename = "JAM_TEXT")]
    pub time: String,
    #[serde(rename = "PROGRAM")]
    pub program: String,
    #[serde(
        rename = "LOKASI",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
}

/// Detail view of the filtered rows. `LOKASI` is part of it only when asked
/// for and present in the source table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DetailTable {
    pub include_location: bool,
    pub rows: Vec<DetailRow>,
}

impl DetailTable {
    pub fn build(records: &[ActivityRecord], show_location: bool, has_location: bool) -> Self {
        let include_location = show_location && has_location;

        let rows = records
            .iter()
            .map(|r| DetailRow {
                user: r.user.clone(),
                date: r.date_str(),
                time: r.time_str(),
                program: r.program.clone(),
                location: if include_location {
                    r.location.clone().filter(|l| !l.is_empty())
                } else {
                    None
                },
            })
            .collect();

        Self {
            include_location,
            rows,
        }
    }

    /// Column names for CSV, XLSX and the terminal table
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["NAMAUSER", "TANGGAL", "JAM_TEXT", "PROGRAM"];
        if self.include_location {
            headers.push("LOKASI");
        }
        headers
    }

    pub fn row_values(&self, row: &DetailRow) -> Vec<String> {
        let mut values = vec![
            row.user.clone(),
            row.date.clone(),
            row.time.clone(),
            row.program.clone(),
        ];
        if self.include_location {
            values.push(row.location.clone().unwrap_or_default());
        }
        values
    }

    pub fn to_table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| self.row_values(r)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
