use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::api::ApiError;
use crate::location::geoip::user_agent;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    city: Option<String>,
    state: Option<String>,
}

/// Resolve coordinates to a locality name, preferring the city and
/// falling back to the province. Nominatim requires an identifying
/// User-Agent, so one is always sent.
pub fn reverse_geocode(http: &Client, latitude: f64, longitude: f64) -> Result<String, ApiError> {
    let url = format!("{NOMINATIM_URL}?format=json&lat={latitude}&lon={longitude}");
    debug!("GET {url}");
    let response = http
        .get(&url)
        .header(reqwest::header::USER_AGENT, user_agent())
        .send()?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    let body: ReverseResponse = response
        .json()
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    body.address
        .and_then(|a| a.city.or(a.state))
        .ok_or_else(|| ApiError::Malformed("no city or state in address".to_string()))
}
