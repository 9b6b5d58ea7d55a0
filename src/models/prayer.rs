use chrono::{Duration, NaiveDateTime, NaiveTime};

/// The five daily prayers, in fixed daily order. The names follow the
/// Indonesian convention used by the myQuran API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Subuh,
    Dzuhur,
    Ashar,
    Maghrib,
    Isya,
}

impl PrayerName {
    pub fn all() -> [PrayerName; 5] {
        [
            PrayerName::Subuh,
            PrayerName::Dzuhur,
            PrayerName::Ashar,
            PrayerName::Maghrib,
            PrayerName::Isya,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Subuh => "Subuh",
            PrayerName::Dzuhur => "Dzuhur",
            PrayerName::Ashar => "Ashar",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isya => "Isya",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One day's five prayer times for one city. Immutable once fetched;
/// replaced wholesale when a new city or day is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    pub subuh: NaiveTime,
    pub dzuhur: NaiveTime,
    pub ashar: NaiveTime,
    pub maghrib: NaiveTime,
    pub isya: NaiveTime,
}

impl PrayerSchedule {
    pub fn time_of(&self, name: PrayerName) -> NaiveTime {
        match name {
            PrayerName::Subuh => self.subuh,
            PrayerName::Dzuhur => self.dzuhur,
            PrayerName::Ashar => self.ashar,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isya => self.isya,
        }
    }

    /// The five (name, time) entries in scan order.
    pub fn entries(&self) -> [(PrayerName, NaiveTime); 5] {
        PrayerName::all().map(|name| (name, self.time_of(name)))
    }
}

/// The soonest not-yet-passed prayer, paired with its absolute timestamp.
/// Recomputed on every tick; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: PrayerName,
    pub at: NaiveDateTime,
}

impl NextPrayer {
    /// Time left until this prayer. Non-negative for any `now` at or
    /// before `at`.
    pub fn remaining(&self, now: NaiveDateTime) -> Duration {
        self.at - now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_order_is_fixed() {
        let names: Vec<&str> = PrayerName::all().iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["Subuh", "Dzuhur", "Ashar", "Maghrib", "Isya"]);
    }

    #[test]
    fn times_round_trip_through_entries() {
        let schedule = PrayerSchedule {
            subuh: NaiveTime::from_hms_opt(4, 30, 0).unwrap(),
            dzuhur: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            ashar: NaiveTime::from_hms_opt(15, 15, 0).unwrap(),
            maghrib: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            isya: NaiveTime::from_hms_opt(19, 15, 0).unwrap(),
        };
        for (name, time) in schedule.entries() {
            assert_eq!(schedule.time_of(name), time);
        }
    }
}
