use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One normalized row of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActivityRecord {
    pub user: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>, // None when the cell is not HH:MM:SS
    pub hour: Option<u32>,       // always derived from `time`
    pub program: String,
    pub location: Option<String>,
    pub datetime: Option<NaiveDateTime>,
}

impl ActivityRecord {
    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Time of day as `HH:MM:SS` (the exported `JAM_TEXT` column).
    pub fn time_str(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    pub fn datetime_str(&self) -> String {
        self.datetime
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }

    pub fn normalized_user(&self) -> String {
        self.user.trim().to_lowercase()
    }

    pub fn normalized_program(&self) -> String {
        self.program.trim().to_uppercase()
    }
}
