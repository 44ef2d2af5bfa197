use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rActivityLog
/// CLI application to audit after-hours activity logs
#[derive(Parser)]
#[command(
    name = "ractivitylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit after-hours activity from a spreadsheet of activity-log records",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by every analysis command.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Date range to analyse.
    ///
    /// Supported formats:
    /// - YYYY                  → entire year (e.g. "2025")
    /// - YYYY-MM              → entire month (e.g. "2025-06")
    /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
    /// - start:end             → same formats on both sides (e.g. "2025-06-01:2025-06-10")
    /// - all                   → whole file
    ///
    /// If omitted, the whole date range found in the file is used.
    #[arg(
        long,
        short,
        value_name = "RANGE",
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or start:end)"
    )]
    pub range: Option<String>,

    /// Keep only these programs (repeatable; exact names as listed by `programs`)
    #[arg(long = "program", short = 'p', value_name = "NAME")]
    pub programs: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Summary of after-hours activity (role accounts excluded)
    Summary {
        /// Activity log (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Detailed after-hours log, optionally exported
    Detail {
        /// Activity log (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Include the LOKASI column (ignored when the file has none)
        #[arg(long = "location", short = 'l')]
        location: bool,

        /// Export the table to this file
        #[arg(long = "out", short = 'o', value_name = "FILE")]
        out: Option<PathBuf>,

        /// Export format (default from configuration)
        #[arg(long, value_enum, requires = "out")]
        format: Option<ExportFormat>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Drill down into one user's activity, or list the users to choose from
    User {
        /// Activity log (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        /// User to analyse (omit to list the selectable users)
        user: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List users with after-hours activity (role accounts included)
    Users {
        /// Activity log (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List program names and the date range found in the file
    Programs {
        /// Activity log (.xlsx, .xls, .ods or .csv)
        file: PathBuf,
    },
}
