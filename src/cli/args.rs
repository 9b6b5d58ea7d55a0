use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jadwal",
    version,
    author,
    about = "A terminal companion for Indonesian prayer schedules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer schedule and the countdown to the next prayer
    Times {
        /// City id as used by the myQuran API (defaults to the configured city)
        #[arg(long)]
        city_id: Option<String>,
        /// Display name shown above the schedule
        #[arg(long)]
        city_name: Option<String>,
    },
    /// Search for a city by name fragment (at least 3 characters)
    Search {
        /// Free-text fragment, e.g. "bandung"
        query: String,
    },
    /// Detect your city from your network location and show its schedule
    Locate,
}
