use chrono::Datelike;
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

/// Returns today's Hijri date as e.g. "12 Rabi' al-Awwal 1447".
pub fn today_hijri_string() -> String {
    let today = chrono::Local::now().date_naive();

    match HijriDate::from_gr(
        today.year() as usize,
        today.month() as usize,
        today.day() as usize,
    ) {
        Ok(hd) => format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year()),
        Err(_) => {
            let hd = HijriDate::today();
            format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year())
        }
    }
}
