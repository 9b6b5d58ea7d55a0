use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::api::ApiError;

/// IP-based geolocation endpoint. The terminal equivalent of asking the
/// device for its coordinates; a failure here is treated like a denied
/// permission.
pub const IPAPI_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Look up the machine's approximate coordinates from its public IP.
pub fn current_position(http: &Client) -> Result<Coordinates, ApiError> {
    debug!("GET {IPAPI_URL}");
    let response = http
        .get(IPAPI_URL)
        .header(reqwest::header::USER_AGENT, user_agent())
        .send()?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    let coords: Coordinates = response
        .json()
        .map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(coords)
}

pub(crate) fn user_agent() -> String {
    format!("jadwal/{}", env!("CARGO_PKG_VERSION"))
}
