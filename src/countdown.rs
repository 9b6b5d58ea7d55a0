use chrono::{Days, NaiveDateTime};

use crate::models::{City, NextPrayer, PrayerName, PrayerSchedule};

/// One live countdown: a city paired with its schedule for today.
/// The TUI owns at most one of these at a time; loading a new schedule
/// replaces the whole value, so a stale countdown can never keep ticking
/// alongside a fresh one.
#[derive(Debug, Clone)]
pub struct CountdownSession {
    pub city: City,
    pub schedule: PrayerSchedule,
}

impl CountdownSession {
    pub fn new(city: City, schedule: PrayerSchedule) -> Self {
        Self { city, schedule }
    }

    pub fn next_prayer(&self, now: NaiveDateTime) -> NextPrayer {
        next_prayer(&self.schedule, now)
    }
}

/// Find the next prayer event relative to `now`.
///
/// Scans the five entries in daily order and picks the first whose
/// timestamp today is strictly after `now`. Once Isya has passed the
/// scan wraps to Subuh on the following date, reusing today's Subuh
/// time of day. Tomorrow's actual Subuh may differ by a minute or two;
/// the approximation is kept deliberately since the countdown restarts
/// from a fresh schedule after midnight anyway.
pub fn next_prayer(schedule: &PrayerSchedule, now: NaiveDateTime) -> NextPrayer {
    for (name, time) in schedule.entries() {
        let at = now.date().and_time(time);
        if at > now {
            return NextPrayer { name, at };
        }
    }

    let tomorrow = now
        .date()
        .checked_add_days(Days::new(1))
        .unwrap_or(now.date());
    NextPrayer {
        name: PrayerName::Subuh,
        at: tomorrow.and_time(schedule.subuh),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveTime;

    use super::*;

    fn schedule() -> PrayerSchedule {
        PrayerSchedule {
            subuh: NaiveTime::from_str("04:30:00").unwrap(),
            dzuhur: NaiveTime::from_str("12:00:00").unwrap(),
            ashar: NaiveTime::from_str("15:15:00").unwrap(),
            maghrib: NaiveTime::from_str("18:00:00").unwrap(),
            isya: NaiveTime::from_str("19:15:00").unwrap(),
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::from_str(s).unwrap()
    }

    #[test]
    fn before_first_prayer() {
        let next = next_prayer(&schedule(), at("2025-09-01T03:00:00"));
        assert_eq!(next.name, PrayerName::Subuh);
        assert_eq!(next.at, at("2025-09-01T04:30:00"));
    }

    #[test]
    fn one_second_before_maghrib() {
        let now = at("2025-09-01T17:59:59");
        let next = next_prayer(&schedule(), now);
        assert_eq!(next.name, PrayerName::Maghrib);
        assert_eq!(next.remaining(now).num_seconds(), 1);
    }

    #[test]
    fn exact_prayer_time_moves_to_following_entry() {
        // Strict "greater than": at 18:00:00 sharp Maghrib has started,
        // so the countdown targets Isya.
        let next = next_prayer(&schedule(), at("2025-09-01T18:00:00"));
        assert_eq!(next.name, PrayerName::Isya);
    }

    #[test]
    fn after_isya_wraps_to_tomorrows_subuh() {
        let now = at("2025-09-01T19:15:01");
        let next = next_prayer(&schedule(), now);
        assert_eq!(next.name, PrayerName::Subuh);
        assert_eq!(next.at, at("2025-09-02T04:30:00"));
        // 19:15:01 -> 04:30:00 next day
        assert_eq!(
            next.remaining(now).num_seconds(),
            9 * 3600 + 14 * 60 + 59
        );
    }

    #[test]
    fn wrap_crosses_month_boundary() {
        let next = next_prayer(&schedule(), at("2025-09-30T23:00:00"));
        assert_eq!(next.at, at("2025-10-01T04:30:00"));
    }

    #[test]
    fn remaining_is_positive_all_day() {
        // Sample the day at a coarse grain; the target must always be
        // strictly in the future.
        let sched = schedule();
        for hour in 0..24 {
            for minute in [0, 29, 59] {
                let now = at("2025-09-01T00:00:00")
                    .date()
                    .and_time(NaiveTime::from_hms_opt(hour, minute, 30).unwrap());
                let next = next_prayer(&sched, now);
                assert!(
                    next.remaining(now).num_seconds() > 0,
                    "non-positive countdown at {now}"
                );
            }
        }
    }

    #[test]
    fn session_replacement_keeps_exactly_one_schedule() {
        let mut active = Some(CountdownSession::new(
            City::new("1301", "Kota Jakarta"),
            schedule(),
        ));
        assert_eq!(active.as_ref().unwrap().city.id, "1301");
        assert_eq!(active.as_ref().unwrap().schedule, schedule());

        let mut other = schedule();
        other.maghrib = NaiveTime::from_str("18:05:00").unwrap();
        active = Some(CountdownSession::new(
            City::new("1219", "Kota Bandung"),
            other.clone(),
        ));

        let session = active.unwrap();
        assert_eq!(session.city.id, "1219");
        assert_eq!(session.schedule, other);
    }
}
