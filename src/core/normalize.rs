//! Row coercion: raw cell text → [`ActivityRecord`].

use crate::errors::{AppError, AppResult};
use crate::models::raw_table::{
    COL_DATE, COL_LOCATION, COL_PROGRAM, COL_TIME, COL_USER, RawTable, cell,
};
use crate::models::record::ActivityRecord;
use crate::utils::date::parse_date_lenient;
use crate::utils::time::parse_time_hms;
use chrono::Timelike;

/// Coerce every row of `table`. Unparseable dates/times become `None`; a
/// required column with no parseable value at all aborts the run.
pub fn normalize(table: &RawTable) -> AppResult<Vec<ActivityRecord>> {
    let user_col = table.column_index(COL_USER);
    let date_col = table.column_index(COL_DATE);
    let time_col = table.column_index(COL_TIME);
    let program_col = table.column_index(COL_PROGRAM);
    let location_col = table.column_index(COL_LOCATION);

    let records: Vec<ActivityRecord> = table
        .rows
        .iter()
        .map(|row| {
            let date = parse_date_lenient(cell(row, date_col));
            let time = parse_time_hms(cell(row, time_col));

            ActivityRecord {
                user: cell(row, user_col).to_string(),
                date,
                time,
                hour: time.map(|t| t.hour()),
                program: cell(row, program_col).to_string(),
                location: location_col.map(|c| cell(row, Some(c)).to_string()),
                datetime: date.zip(time).map(|(d, t)| d.and_time(t)),
            }
        })
        .collect();

    if !records.is_empty() {
        if records.iter().all(|r| r.time.is_none()) {
            return Err(AppError::FieldCoercion {
                column: COL_TIME.to_string(),
                expected: "HH:MM:SS, e.g. 17:45:03".to_string(),
            });
        }
        if records.iter().all(|r| r.date.is_none()) {
            return Err(AppError::FieldCoercion {
                column: COL_DATE.to_string(),
                expected: "a calendar date, e.g. 2025-03-31 or 03/31/2025".to_string(),
            });
        }
    }

    let bad_times = records.iter().filter(|r| r.time.is_none()).count();
    if bad_times > 0 {
        log::warn!("{bad_times} row(s) with an unparseable {COL_TIME} value");
    }

    Ok(records)
}
