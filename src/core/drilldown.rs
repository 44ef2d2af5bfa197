//! Per-user drill-down: chronological log, span and longest pauses.

use crate::core::calculator::gaps::{Gap, longest_gaps};
use crate::core::calculator::ranking::rank_by_frequency;
use crate::core::calculator::timeline::{Timeline, build_timeline};
use crate::models::record::ActivityRecord;
use chrono::{NaiveDateTime, TimeDelta};

#[derive(Debug, Clone)]
pub struct UserReport {
    pub user: String,
    pub timeline: Timeline,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    pub span: Option<TimeDelta>,
    pub top_programs: Vec<(String, usize)>,
    pub gaps: Vec<Gap>,
}

impl UserReport {
    pub fn total(&self) -> usize {
        self.timeline.records.len()
    }

    /// Span rounded down to whole minutes.
    pub fn span_minutes(&self) -> Option<i64> {
        self.span.map(|d| d.num_minutes())
    }
}

/// Report for `user` over `pool` (the range/program rows, any hour, role
/// accounts included). `None` when the user has no row in the pool.
pub fn user_report(
    pool: &[ActivityRecord],
    user: &str,
    min_gap: TimeDelta,
    top_n: usize,
) -> Option<UserReport> {
    let rows: Vec<ActivityRecord> = pool.iter().filter(|r| r.user == user).cloned().collect();
    if rows.is_empty() {
        return None;
    }

    let timeline = build_timeline(&rows);

    let mut top_programs = rank_by_frequency(timeline.records.iter().map(|r| r.program.clone()));
    top_programs.truncate(top_n);

    Some(UserReport {
        user: user.to_string(),
        first: timeline.first(),
        last: timeline.last(),
        span: timeline.span(),
        top_programs,
        gaps: longest_gaps(&timeline, min_gap, top_n),
        timeline,
    })
}

/// Users offered for drill-down: distinct after-hours users, sorted.
pub fn user_choices(after_hours: &[ActivityRecord]) -> Vec<String> {
    let mut users: Vec<String> = after_hours.iter().map(|r| r.user.clone()).collect();
    users.sort();
    users.dedup();
    users
}
