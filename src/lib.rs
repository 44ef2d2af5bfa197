//! rActivityLog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Detail { .. } => cli::commands::detail::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::Users { .. } => cli::commands::users::handle(&cli.command, cfg),
        Commands::Programs { .. } => cli::commands::programs::handle(&cli.command, cfg),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init()
        .ok();
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ config path: --config wins over the default location
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);

    // 3️⃣ carica config UNA sola volta (init must work with a broken file too)
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(&config_path)?,
    };

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, &config_path)
}
