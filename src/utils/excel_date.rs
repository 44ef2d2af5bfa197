// src/utils/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

/// Convert an Excel serial (days since 1899-12-30, fraction = time of day)
/// into a date-time, rounding to the nearest second.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial * 86_400.0).round() as i64;
    excel_epoch().checked_add_signed(Duration::seconds(secs))
}

/// Render an Excel date-time serial the way the cell would read as text:
/// time-only serials as `HH:MM:SS`, whole days as `YYYY-MM-DD`, anything
/// else as `YYYY-MM-DD HH:MM:SS`.
pub fn excel_serial_to_text(serial: f64) -> Option<String> {
    let dt = excel_serial_to_datetime(serial)?;
    let text = if serial < 1.0 {
        dt.format("%H:%M:%S").to_string()
    } else if dt.time() == NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    };
    Some(text)
}

/// Render an ODS `office:date-value` (`2025-03-10`, `2025-03-10T18:05:09`)
/// with the same conventions as [`excel_serial_to_text`]. Values on the
/// 1899-12-30 epoch day are time-only cells.
pub fn iso_datetime_to_text(s: &str) -> Option<String> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        let text = if dt.date() <= excel_epoch().date() {
            dt.format("%H:%M:%S").to_string()
        } else if dt.time() == NaiveTime::MIN {
            dt.format("%Y-%m-%d").to_string()
        } else {
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        };
        return Some(text);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Render an ODS `office:time-value` (`PT18H05M09S`, `P0DT18H05M09.000S`)
/// as `HH:MM:SS`. Durations of a day or more are not a time of day.
pub fn iso_duration_to_text(s: &str) -> Option<String> {
    let rest = s.trim().strip_prefix('P')?;
    let (days, time) = rest.split_once('T').unwrap_or((rest, ""));

    let mut secs = 0.0_f64;
    if !days.is_empty() {
        let d: f64 = days.strip_suffix('D')?.parse().ok()?;
        secs += d * 86_400.0;
    }

    let mut number = String::new();
    for ch in time.chars() {
        let unit = match ch {
            'H' => 3_600.0,
            'M' => 60.0,
            'S' => 1.0,
            _ => {
                number.push(ch);
                continue;
            }
        };
        let n: f64 = number.parse().ok()?;
        secs += n * unit;
        number.clear();
    }
    if !number.is_empty() {
        return None;
    }

    let secs = secs.round() as i64;
    if !(0..86_400).contains(&secs) {
        return None;
    }
    let t = NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)?;
    Some(t.format("%H:%M:%S").to_string())
}

/// Excel serial and number format for a `YYYY-MM-DD` date or an
/// `HH:MM:SS` time.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let duration = d.and_time(NaiveTime::MIN) - excel_epoch();
        let serial = duration.num_seconds() as f64 / 86_400.0;
        return Some(("yyyy-mm-dd", serial));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm:ss", seconds / 86_400.0));
    }

    None
}
