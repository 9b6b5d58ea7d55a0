pub mod city;
pub mod prayer;

pub use city::City;
pub use prayer::{NextPrayer, PrayerName, PrayerSchedule};
