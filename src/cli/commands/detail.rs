use crate::cli::commands::{analyze, report_empty};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::ranking::rank_by_frequency;
use crate::errors::AppResult;
use crate::export::{CsvCache, DetailTable, ExportLogic};
use crate::ui::messages::info;
use crate::ui::views::print_detail;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Detail {
        file,
        filters,
        location,
        out,
        format,
        force,
    } = cmd
    {
        let output = analyze(file, filters, cfg)?;

        if let Some(stage) = output.empty_stage() {
            report_empty(stage);
            return Ok(());
        }

        if *location && !output.has_location {
            info("The file has no LOKASI column; showing the table without it.");
        }

        let detail = DetailTable::build(&output.non_role, *location, output.has_location);
        let per_user = rank_by_frequency(output.non_role.iter().map(|r| r.user.clone()));
        print_detail(&detail, &per_user);

        if let Some(path) = out {
            let format = format.unwrap_or(cfg.default_export_format);
            let mut cache = CsvCache::new();
            ExportLogic::export(&detail, format, path, *force, &mut cache)?;
        }
    }
    Ok(())
}
