use crate::cli::commands::report_empty;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filters::{Selection, date_bounds, program_choices};
use crate::core::pipeline::{EmptyStage, analyze_file};
use crate::errors::AppResult;
use crate::ui::messages::metric;
use crate::ui::views::print_list;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Programs { file } = cmd {
        let output = analyze_file(file, cfg, &Selection::default())?;

        if output.active.is_empty() {
            report_empty(EmptyStage::Exclusion);
            return Ok(());
        }

        print_list("Programs", &program_choices(&output.active));

        println!();
        match date_bounds(&output.active) {
            Some((first, last)) => {
                metric("First date", first);
                metric("Last date", last);
            }
            None => metric("Dates", "--"),
        }
        metric("Location column", if output.has_location { "yes" } else { "no" });
    }
    Ok(())
}
