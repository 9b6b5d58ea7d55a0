mod api;
mod cli;
mod config;
mod countdown;
mod location;
mod models;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use api::ScheduleApi;
use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    let api = ScheduleApi::new(&config.api.base_url);

    match cli.command {
        Some(Commands::Times { city_id, city_name }) => {
            handlers::handle_times(&api, &config, city_id, city_name)?;
        }
        Some(Commands::Search { query }) => {
            handlers::handle_search(&api, &query)?;
        }
        Some(Commands::Locate) => {
            handlers::handle_locate(&api, &config)?;
        }

        // No subcommand → launch the TUI
        None => {
            tui::app::run(api, config)?;
        }
    }

    Ok(())
}
