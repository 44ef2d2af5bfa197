//! Formatting utilities used for CLI and export outputs.

use chrono::TimeDelta;

use crate::utils::time::split_hms;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `33h 25m` style rendering of a span in whole minutes.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    format!("{:02}h {:02}m", abs_m / 60, abs_m % 60)
}

/// `1h 12m 30s` style rendering of a pause.
pub fn delta2readable(d: TimeDelta) -> String {
    let (h, m, s) = split_hms(d);
    format!("{:02}h {:02}m {:02}s", h, m, s)
}

/// Busiest-hour bucket label, e.g. `18:00 - 19:00`.
pub fn hour_bucket(hour: u32) -> String {
    format!("{}:00 - {}:00", hour, hour + 1)
}
