//! Pauses between consecutive activities of the same user.

use crate::core::calculator::timeline::Timeline;
use chrono::{NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub start: NaiveDateTime,
    /// Activity that ended the pause.
    pub end: NaiveDateTime,
    pub duration: TimeDelta,
}

/// `end[i] - end[i-1]` for every consecutive pair of timestamps.
pub fn consecutive_gaps(timeline: &Timeline) -> Vec<Gap> {
    timeline
        .timestamps
        .windows(2)
        .map(|w| Gap {
            start: w[0],
            end: w[1],
            duration: w[1] - w[0],
        })
        .collect()
}

/// The `top_n` longest pauses strictly longer than `min`, longest first.
/// Equal pauses keep chronological order.
pub fn longest_gaps(timeline: &Timeline, min: TimeDelta, top_n: usize) -> Vec<Gap> {
    let mut gaps: Vec<Gap> = consecutive_gaps(timeline)
        .into_iter()
        .filter(|g| g.duration > min)
        .collect();

    gaps.sort_by(|a, b| b.duration.cmp(&a.duration));
    gaps.truncate(top_n);
    gaps
}
