/// Column holding the user id
pub const COL_USER: &str = "NAMAUSER";
/// Column holding the activity date
pub const COL_DATE: &str = "TANGGAL";
/// Column holding the activity time of day
pub const COL_TIME: &str = "JAM";
pub const COL_PROGRAM: &str = "PROGRAM";
/// Optional column: location of the workstation
pub const COL_LOCATION: &str = "LOKASI";

pub const REQUIRED_COLUMNS: [&str; 4] = [COL_USER, COL_TIME, COL_DATE, COL_PROGRAM];

/// Table as read from the uploaded file, before any coercion.
///
/// Header names are already normalized (see `ingest::schema::normalize_header`),
/// every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

/// Cell text for `row` / `col`, empty when the column is missing.
pub fn cell(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).map(String::as_str).unwrap_or("")
}
