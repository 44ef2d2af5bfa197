//! Ingest → normalize → exclusion → range/program → after-hours → role.

use crate::config::Config;
use crate::core::filters::{self, Selection};
use crate::core::normalize::normalize;
use crate::errors::AppResult;
use crate::ingest::load_table;
use crate::models::raw_table::COL_LOCATION;
use crate::models::record::ActivityRecord;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Stage whose output was empty. Not an error: views depending on that stage
/// print an informational message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStage {
    Exclusion,
    Selection,
    AfterHours,
    RoleFilter,
}

impl fmt::Display for EmptyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EmptyStage::Exclusion => {
                "No activity left after excluding the login/logout programs."
            }
            EmptyStage::Selection => "No activity matches the selected date range and programs.",
            EmptyStage::AfterHours => {
                "No after-hours activity found for the selected filters."
            }
            EmptyStage::RoleFilter => {
                "No after-hours activity from non-role accounts for the selected filters."
            }
        };
        f.write_str(msg)
    }
}

/// Filter settings resolved once from the configuration.
#[derive(Debug, Clone)]
pub struct FilterChain {
    pub excluded_programs: HashSet<String>,
    pub cutoff: NaiveTime,
    pub role_accounts: HashSet<String>,
}

impl FilterChain {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            excluded_programs: cfg.excluded_program_set(),
            cutoff: cfg.cutoff()?,
            role_accounts: cfg.role_account_set(),
        })
    }

    /// Run the four filters over already normalized records.
    pub fn run(&self, records: Vec<ActivityRecord>, selection: &Selection) -> PipelineOutput {
        let active = filters::exclude_programs(&records, &self.excluded_programs);
        let range = selection.range.or_else(|| filters::date_bounds(&active));

        let selected = match range {
            Some((start, end)) => {
                filters::select_range_and_programs(&active, start, end, &selection.programs)
            }
            None => Vec::new(),
        };
        let after_hours = filters::after_hours(&selected, self.cutoff);
        let non_role = filters::exclude_role_accounts(&after_hours, &self.role_accounts);

        log::debug!(
            "rows: ingested={} active={} selected={} after_hours={} non_role={}",
            records.len(),
            active.len(),
            selected.len(),
            after_hours.len(),
            non_role.len()
        );

        PipelineOutput {
            has_location: records.iter().any(|r| r.location.is_some()),
            records,
            active,
            range,
            selected,
            after_hours,
            non_role,
        }
    }
}

/// Snapshots of every stage; the views pick the one they need.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// Whether the source table carries a LOKASI column.
    pub has_location: bool,
    /// Normalized rows, untouched.
    pub records: Vec<ActivityRecord>,
    /// Without login/logout markers.
    pub active: Vec<ActivityRecord>,
    /// Date range actually applied.
    pub range: Option<(NaiveDate, NaiveDate)>,
    /// Range and program filter applied: the drill-down pool.
    pub selected: Vec<ActivityRecord>,
    /// After-hours rows, role accounts included.
    pub after_hours: Vec<ActivityRecord>,
    /// After-hours rows without role accounts: summary and detail views.
    pub non_role: Vec<ActivityRecord>,
}

impl PipelineOutput {
    /// First stage that produced no rows, if any.
    pub fn empty_stage(&self) -> Option<EmptyStage> {
        if self.active.is_empty() {
            Some(EmptyStage::Exclusion)
        } else if self.selected.is_empty() {
            Some(EmptyStage::Selection)
        } else if self.after_hours.is_empty() {
            Some(EmptyStage::AfterHours)
        } else if self.non_role.is_empty() {
            Some(EmptyStage::RoleFilter)
        } else {
            None
        }
    }
}

/// Whole pipeline for one input file.
pub fn analyze_file(path: &Path, cfg: &Config, selection: &Selection) -> AppResult<PipelineOutput> {
    let table = load_table(path)?;
    let has_location = table.has_column(COL_LOCATION);
    let records = normalize(&table)?;

    let chain = FilterChain::from_config(cfg)?;
    let mut output = chain.run(records, selection);
    output.has_location = has_location;
    Ok(output)
}
