pub mod config;
pub mod detail;
pub mod init;
pub mod programs;
pub mod summary;
pub mod user;
pub mod users;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::filters::Selection;
use crate::core::pipeline::{EmptyStage, PipelineOutput, analyze_file};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::range::parse_range;
use std::path::Path;

/// Parse the shared filter flags and run the pipeline over `file`.
pub(crate) fn analyze(file: &Path, filters: &FilterArgs, cfg: &Config) -> AppResult<PipelineOutput> {
    let range = match &filters.range {
        Some(r) => parse_range(r)?,
        None => None,
    };

    let selection = Selection {
        range,
        programs: filters.programs.clone(),
    };

    analyze_file(file, cfg, &selection)
}

/// Tell the user why there is nothing to show.
pub(crate) fn report_empty(stage: EmptyStage) {
    match stage {
        EmptyStage::RoleFilter => info(stage),
        _ => warning(stage),
    }
}
