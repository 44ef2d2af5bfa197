use crate::cli::commands::{analyze, report_empty};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::build_summary;
use crate::errors::AppResult;
use crate::ui::views::print_summary;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { file, filters } = cmd {
        let output = analyze(file, filters, cfg)?;

        if let Some(stage) = output.empty_stage() {
            report_empty(stage);
            return Ok(());
        }

        if let Some(summary) = build_summary(&output.non_role, cfg.top_n) {
            print_summary(&summary);
        }
    }
    Ok(())
}
