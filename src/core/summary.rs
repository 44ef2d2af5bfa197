//! Aggregate metrics over the final (after-hours, non-role) rows.

use crate::core::calculator::ranking::{most_frequent, rank_by_frequency};
use crate::models::record::ActivityRecord;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub distinct_users: usize,
    /// Most active user and their row count.
    pub top_user: (String, usize),
    /// Busiest hour of the day (0-23) and its row count.
    pub busiest_hour: Option<(u32, usize)>,
    pub top_programs: Vec<(String, usize)>,
    /// Latest rows by time of day, most recent first.
    pub latest: Vec<ActivityRecord>,
    /// Row count of every user, most active first.
    pub per_user: Vec<(String, usize)>,
}

/// `None` when there is nothing to summarize.
pub fn build_summary(records: &[ActivityRecord], top_n: usize) -> Option<Summary> {
    let per_user = rank_by_frequency(records.iter().map(|r| r.user.clone()));
    let top_user = per_user.first().cloned()?;

    let busiest_hour = most_frequent(records.iter().filter_map(|r| r.hour));

    let mut top_programs = rank_by_frequency(records.iter().map(|r| r.program.clone()));
    top_programs.truncate(top_n);

    // stable: equal times keep their original order
    let mut latest = records.to_vec();
    latest.sort_by(|a, b| b.time.cmp(&a.time));
    latest.truncate(top_n);

    Some(Summary {
        total: records.len(),
        distinct_users: per_user.len(),
        top_user,
        busiest_hour,
        top_programs,
        latest,
        per_user,
    })
}
