use crate::cli::commands::{analyze, report_empty};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::drilldown::{user_choices, user_report};
use crate::core::pipeline::EmptyStage;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::views::{print_list, print_user_report};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        file,
        user,
        filters,
    } = cmd
    {
        let output = analyze(file, filters, cfg)?;

        // the drill-down pool only needs the range/program stage
        if let Some(stage @ (EmptyStage::Exclusion | EmptyStage::Selection)) = output.empty_stage() {
            report_empty(stage);
            return Ok(());
        }

        let Some(user) = user else {
            let users = user_choices(&output.after_hours);
            if users.is_empty() {
                report_empty(EmptyStage::AfterHours);
            } else {
                print_list("Users with after-hours activity (role accounts included)", &users);
                info("Run again with one of these names to see its activity.");
            }
            return Ok(());
        };

        let min_gap = cfg.min_gap()?;
        match user_report(&output.selected, user, min_gap, cfg.top_n) {
            Some(report) => print_user_report(&report),
            None => info(format!(
                "No activity for user '{user}' in the selected range and programs."
            )),
        }
    }
    Ok(())
}
