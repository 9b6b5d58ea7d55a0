use anyhow::{anyhow, Result};
use chrono::Local;

use crate::api::{query_too_short, ScheduleApi, MIN_QUERY_LEN};
use crate::config::AppConfig;
use crate::countdown::next_prayer;
use crate::location::detect_city;
use crate::models::City;
use crate::utils::format::{format_countdown, format_time, indonesian_date};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(
    api: &ScheduleApi,
    config: &AppConfig,
    city_id: Option<String>,
    city_name: Option<String>,
) -> Result<()> {
    let city = match city_id {
        Some(id) => {
            let name = city_name.unwrap_or_else(|| format!("City {id}"));
            City::new(id, name)
        }
        None => config.location.default_city(),
    };
    print_schedule(api, &city)
}

// ─── Search ──────────────────────────────────────────────────────────────────

pub fn handle_search(api: &ScheduleApi, query: &str) -> Result<()> {
    if query_too_short(query) {
        return Err(anyhow!(
            "Enter at least {MIN_QUERY_LEN} characters to search for a city"
        ));
    }

    let cities = api
        .search_cities(query)
        .map_err(|e| anyhow!("City search failed: {e}"))?;

    println!();
    if cities.is_empty() {
        println_colored!(DIM, "  No city matches '{}'", query.trim());
    } else {
        println_colored!(GOLD, "  Cities matching '{}'", query.trim());
        println!();
        for city in &cities {
            println!("  {:<6}  {}", city.id, city.name);
        }
        println!();
        println_colored!(DIM, "  jadwal times --city-id <id> shows a schedule");
    }
    println!();
    Ok(())
}

// ─── Locate ──────────────────────────────────────────────────────────────────

pub fn handle_locate(api: &ScheduleApi, config: &AppConfig) -> Result<()> {
    println_colored!(DIM, "  Detecting your location...");
    let detection = detect_city(api, config.location.default_city());
    if let Some(notice) = &detection.notice {
        println_colored!(AMBER, "  {}", notice);
    }
    print_schedule(api, &detection.city)
}

// ─── Shared schedule printer ─────────────────────────────────────────────────

fn print_schedule(api: &ScheduleApi, city: &City) -> Result<()> {
    let now = Local::now().naive_local();
    let schedule = api
        .schedule_for(&city.id, now.date())
        .map_err(|e| anyhow!("Could not load the schedule for {}: {e}", city.name))?;

    println!();
    println_colored!(GOLD, "  {} — {}", city.name, indonesian_date(now.date()));
    println!();

    let next = next_prayer(&schedule, now);
    for (name, time) in schedule.entries() {
        let marker = if name == next.name { "  ◀ next" } else { "" };
        let is_past = now.date().and_time(time) <= now;
        if is_past {
            println_colored!(DIM, "  {:<9}  {}{}", name.display_name(), format_time(time), marker);
        } else {
            println_colored!(BOLD, "  {:<9}  {}{}", name.display_name(), format_time(time), marker);
        }
    }

    println!();
    println_colored!(
        AMBER,
        "  Next: {} in {}",
        next.name.display_name(),
        format_countdown(next.remaining(now))
    );
    println!();
    Ok(())
}
