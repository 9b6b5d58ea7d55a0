use chrono::{NaiveDate, NaiveTime};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{City, PrayerSchedule};

pub const MYQURAN_BASE_URL: &str = "https://api.myquran.com/v2";

/// Shortest city query the search endpoint is asked to handle.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

// Response envelopes, matching the myQuran v2 wire shapes. Fields that
// the failure paths can omit are Options so a bad day degrades into a
// Malformed error instead of a serde one.

#[derive(Debug, Deserialize)]
struct ScheduleEnvelope {
    #[serde(default)]
    status: bool,
    data: Option<ScheduleData>,
}

#[derive(Debug, Deserialize)]
struct ScheduleData {
    jadwal: Option<Jadwal>,
}

#[derive(Debug, Deserialize)]
struct Jadwal {
    subuh: String,
    dzuhur: String,
    ashar: String,
    maghrib: String,
    isya: String,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    data: Option<Vec<City>>,
}

/// Blocking client for the myQuran prayer-schedule API. Callers run it
/// off the UI thread; there is no retry and no timeout beyond the
/// transport defaults.
pub struct ScheduleApi {
    base_url: String,
    http: Client,
}

impl ScheduleApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Fetch the five prayer times for one city on one date.
    pub fn schedule_for(&self, city_id: &str, date: NaiveDate) -> Result<PrayerSchedule, ApiError> {
        let url = format!(
            "{}/sholat/jadwal/{}/{}",
            self.base_url,
            city_id,
            date.format("%Y/%m/%d")
        );
        debug!("GET {url}");
        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        parse_schedule(&response.text()?)
    }

    /// Search cities by free-text fragment. Callers enforce
    /// [`MIN_QUERY_LEN`] before reaching the network.
    pub fn search_cities(&self, query: &str) -> Result<Vec<City>, ApiError> {
        let url = format!("{}/sholat/kota/cari/{}", self.base_url, query.trim());
        debug!("GET {url}");
        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        parse_cities(&response.text()?)
    }
}

/// True when a trimmed query is too short to send to the search API.
pub fn query_too_short(query: &str) -> bool {
    query.trim().chars().count() < MIN_QUERY_LEN
}

fn parse_schedule(body: &str) -> Result<PrayerSchedule, ApiError> {
    let envelope: ScheduleEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    if !envelope.status {
        return Err(ApiError::Malformed("status=false".to_string()));
    }
    let jadwal = envelope
        .data
        .and_then(|d| d.jadwal)
        .ok_or_else(|| ApiError::Malformed("missing data.jadwal".to_string()))?;

    Ok(PrayerSchedule {
        subuh: parse_hhmm(&jadwal.subuh)?,
        dzuhur: parse_hhmm(&jadwal.dzuhur)?,
        ashar: parse_hhmm(&jadwal.ashar)?,
        maghrib: parse_hhmm(&jadwal.maghrib)?,
        isya: parse_hhmm(&jadwal.isya)?,
    })
}

fn parse_cities(body: &str) -> Result<Vec<City>, ApiError> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(envelope.data.unwrap_or_default())
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, ApiError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ApiError::Malformed(format!("bad time of day '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_SCHEDULE: &str = r#"{
        "status": true,
        "data": {
            "id": 1301,
            "lokasi": "KOTA JAKARTA",
            "jadwal": {
                "tanggal": "Senin, 01/09/2025",
                "subuh": "04:30",
                "dzuhur": "12:00",
                "ashar": "15:15",
                "maghrib": "18:00",
                "isya": "19:15"
            }
        }
    }"#;

    #[test]
    fn parses_schedule_envelope() {
        let schedule = parse_schedule(GOOD_SCHEDULE).unwrap();
        assert_eq!(format!("{}", schedule.subuh.format("%H:%M")), "04:30");
        assert_eq!(format!("{}", schedule.isya.format("%H:%M")), "19:15");
    }

    #[test]
    fn rejects_status_false() {
        let body = r#"{"status": false, "data": null}"#;
        assert!(matches!(
            parse_schedule(body),
            Err(ApiError::Malformed(msg)) if msg.contains("status")
        ));
    }

    #[test]
    fn rejects_missing_jadwal() {
        let body = r#"{"status": true, "data": {"lokasi": "KOTA JAKARTA"}}"#;
        assert!(matches!(
            parse_schedule(body),
            Err(ApiError::Malformed(msg)) if msg.contains("jadwal")
        ));
    }

    #[test]
    fn rejects_bad_time_of_day() {
        let body = GOOD_SCHEDULE.replace("04:30", "soon");
        assert!(matches!(
            parse_schedule(&body),
            Err(ApiError::Malformed(msg)) if msg.contains("soon")
        ));
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(matches!(
            parse_schedule("<html>rate limited</html>"),
            Err(ApiError::Malformed(_))
        ));
    }

    #[test]
    fn parses_city_results() {
        let body = r#"{
            "status": true,
            "data": [
                {"id": "1301", "lokasi": "KOTA JAKARTA"},
                {"id": "1219", "lokasi": "KOTA BANDUNG"}
            ]
        }"#;
        let cities = parse_cities(body).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0], City::new("1301", "KOTA JAKARTA"));
    }

    #[test]
    fn null_city_data_is_an_empty_result() {
        let cities = parse_cities(r#"{"data": null}"#).unwrap();
        assert!(cities.is_empty());
    }

    #[test]
    fn query_length_is_measured_after_trimming() {
        assert!(query_too_short("ab"));
        assert!(query_too_short("  ab  "));
        assert!(!query_too_short("ban"));
        assert!(query_too_short(""));
    }
}
