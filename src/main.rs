mod cli;
mod config;
mod engine;
mod models;
mod storage;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    if !AppConfig::config_path()?.exists() {
        if let Err(e) = config.save() {
            log::warn!("Could not write default config: {}", e);
        }
    }

    AppConfig::ensure_data_dir()?;
    let habits_path = AppConfig::habits_path()?;
    let mut store = storage::load_habits(&habits_path);

    // A new day must clear yesterday's done flags before anything is shown.
    let today = Local::now().date_naive();
    if store.apply_daily_rollover(today) {
        storage::save_habits(&habits_path, &store)?;
    }

    match cli.command {
        Some(Commands::Add { name, days, remind }) => {
            handlers::handle_add(&mut store, &habits_path, &name, &days, &remind)?;
        }
        Some(Commands::Done { habit }) => {
            handlers::handle_done(&mut store, &habits_path, &habit, today)?;
        }
        Some(Commands::Calendar { month }) => {
            handlers::handle_calendar(&store, &config, month.as_deref(), today)?;
        }
        Some(Commands::Stats) => {
            handlers::handle_stats(&store)?;
        }
        Some(Commands::Export) => {
            handlers::handle_export(&store, today)?;
        }
        // No subcommand → today view
        Some(Commands::List) | None => {
            handlers::handle_list(&store, &config, today)?;
        }
    }

    Ok(())
}
