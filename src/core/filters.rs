//! The four row filters, applied in this order by the pipeline.
//!
//! Each one only ever narrows its input and returns a fresh `Vec`, so any
//! stage can be run (and tested) on its own.

use crate::models::record::ActivityRecord;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;

/// Date range and program selection coming from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Inclusive bounds; `None` means "whole data range".
    pub range: Option<(NaiveDate, NaiveDate)>,
    /// Exact program names; empty means no restriction.
    pub programs: Vec<String>,
}

/// Drop login/logout markers. `excluded` holds trimmed, uppercased names.
pub fn exclude_programs(
    records: &[ActivityRecord],
    excluded: &HashSet<String>,
) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|r| !excluded.contains(&r.normalized_program()))
        .cloned()
        .collect()
}

/// Keep rows dated within `[start, end]` whose program was selected.
pub fn select_range_and_programs(
    records: &[ActivityRecord],
    start: NaiveDate,
    end: NaiveDate,
    programs: &[String],
) -> Vec<ActivityRecord> {
    let wanted: HashSet<&str> = programs.iter().map(String::as_str).collect();

    records
        .iter()
        .filter(|r| matches!(r.date, Some(d) if d >= start && d <= end))
        .filter(|r| wanted.is_empty() || wanted.contains(r.program.as_str()))
        .cloned()
        .collect()
}

/// Keep rows strictly later than `cutoff`; rows without a time never match.
pub fn after_hours(records: &[ActivityRecord], cutoff: NaiveTime) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|r| matches!(r.time, Some(t) if t > cutoff))
        .cloned()
        .collect()
}

/// Drop role accounts. `accounts` holds trimmed, lowercased ids.
pub fn exclude_role_accounts(
    records: &[ActivityRecord],
    accounts: &HashSet<String>,
) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|r| !accounts.contains(&r.normalized_user()))
        .cloned()
        .collect()
}

/// Earliest and latest date present, used as the default range.
pub fn date_bounds(records: &[ActivityRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().filter_map(|r| r.date).min()?;
    let max = records.iter().filter_map(|r| r.date).max()?;
    Some((min, max))
}

/// Sorted distinct program names, the choices offered for `--program`.
pub fn program_choices(records: &[ActivityRecord]) -> Vec<String> {
    let mut programs: Vec<String> = records
        .iter()
        .map(|r| r.program.clone())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    programs.sort();
    programs
}
