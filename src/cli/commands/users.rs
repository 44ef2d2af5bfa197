use crate::cli::commands::{analyze, report_empty};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::drilldown::user_choices;
use crate::errors::AppResult;
use crate::ui::views::print_list;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users { file, filters } = cmd {
        let output = analyze(file, filters, cfg)?;

        // role accounts are listed too, so only the earlier stages matter
        if output.after_hours.is_empty() {
            if let Some(stage) = output.empty_stage() {
                report_empty(stage);
            }
            return Ok(());
        }

        print_list(
            "Users with after-hours activity (role accounts included)",
            &user_choices(&output.after_hours),
        );
    }
    Ok(())
}
