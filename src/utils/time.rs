//! Time utilities: strict HH:MM:SS parsing and duration splitting.

use chrono::{NaiveTime, TimeDelta};

/// Strict `HH:MM:SS`; anything else is `None`.
pub fn parse_time_hms(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M:%S").ok()
}

/// Split a duration into (hours, minutes, seconds), ignoring the sign.
pub fn split_hms(d: TimeDelta) -> (i64, i64, i64) {
    let secs = d.num_seconds().abs();
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}
