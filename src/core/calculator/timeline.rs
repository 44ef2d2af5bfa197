use crate::models::record::ActivityRecord;
use chrono::{NaiveDateTime, TimeDelta};

/// One user's activity in chronological order.
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    /// All rows, ascending by date-time; rows without one come last.
    pub records: Vec<ActivityRecord>,
    /// Date-times of the dated rows, ascending.
    pub timestamps: Vec<NaiveDateTime>,
}

impl Timeline {
    pub fn first(&self) -> Option<NaiveDateTime> {
        self.timestamps.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.timestamps.last().copied()
    }

    /// Time between first and last activity.
    pub fn span(&self) -> Option<TimeDelta> {
        Some(self.last()? - self.first()?)
    }
}

pub fn build_timeline(records: &[ActivityRecord]) -> Timeline {
    if records.is_empty() {
        return Timeline::default();
    }

    // -----------------------------
    // Sort chronologically (stable, undated rows last)
    // -----------------------------
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| (r.datetime.is_none(), r.datetime));

    let timestamps = sorted.iter().filter_map(|r| r.datetime).collect();

    Timeline {
        records: sorted,
        timestamps,
    }
}
