use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

const WEEKDAY_NAMES: &[&str] = &[
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

const MONTH_NAMES: &[&str] = &[
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format a countdown as "HH:MM:SS", each field zero-padded to two
/// digits. Negative durations clamp to zero rather than rendering a
/// minus sign mid-tick.
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Format a NaiveTime to "HH:MM:SS" for the live clock
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Today's date the way the schedule source presents it, e.g.
/// "Senin, 1 September 2025".
pub fn indonesian_date(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize];
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}, {} {} {}", weekday, date.day(), month, date.year())
}
