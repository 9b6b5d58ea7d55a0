use log::{info, warn};
use reqwest::blocking::Client;

use crate::api::ScheduleApi;
use crate::location::{geocode, geoip};
use crate::models::City;

/// Outcome of a detection run. `notice` carries the user-facing
/// explanation when the run fell back to the default city; it is None
/// only when the user's own city was resolved.
#[derive(Debug, Clone)]
pub struct Detection {
    pub city: City,
    pub notice: Option<String>,
}

impl Detection {
    fn fallback(city: City, reason: &str) -> Self {
        let notice = format!("{reason}; showing the schedule for {}.", city.name);
        Self {
            city,
            notice: Some(notice),
        }
    }
}

/// Resolve the user's city: IP geolocation, then reverse geocoding, then
/// a city search on the first word of the resolved place name. Every
/// failure path lands on `fallback`, so the caller always gets a city it
/// can fetch a schedule for.
pub fn detect_city(api: &ScheduleApi, fallback: City) -> Detection {
    let http = Client::new();

    let position = match geoip::current_position(&http) {
        Ok(p) => p,
        Err(err) => {
            warn!("ip geolocation failed: {err}");
            return Detection::fallback(fallback, "Could not determine your location");
        }
    };

    let place = match geocode::reverse_geocode(&http, position.latitude, position.longitude) {
        Ok(p) => p,
        Err(err) => {
            warn!("reverse geocoding failed: {err}");
            return Detection::fallback(fallback, "Could not name your location");
        }
    };

    let query = search_query_for(&place);
    match api.search_cities(query) {
        Ok(mut cities) if !cities.is_empty() => {
            let city = cities.remove(0);
            info!("detected city {} ({}) from '{}'", city.name, city.id, place);
            Detection { city, notice: None }
        }
        Ok(_) => Detection::fallback(
            fallback,
            &format!("No schedule city matches '{query}'"),
        ),
        Err(err) => {
            warn!("city lookup for '{query}' failed: {err}");
            Detection::fallback(fallback, "Could not look up your city")
        }
    }
}

/// The search fragment derived from a reverse-geocoded place name: its
/// first whitespace-delimited token. Multi-word localities ("Daerah
/// Khusus Ibukota Jakarta") match more reliably on one word than on the
/// full official name.
fn search_query_for(place: &str) -> &str {
    place.split_whitespace().next().unwrap_or(place)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_first_token_of_place_name() {
        assert_eq!(search_query_for("Jakarta"), "Jakarta");
        assert_eq!(search_query_for("Daerah Khusus Ibukota Jakarta"), "Daerah");
        assert_eq!(search_query_for("  Jawa Barat"), "Jawa");
        assert_eq!(search_query_for(""), "");
    }

    #[test]
    fn fallback_carries_an_explanation() {
        let detection = Detection::fallback(
            City::new("1301", "Kota Jakarta"),
            "Could not determine your location",
        );
        assert_eq!(detection.city.id, "1301");
        let notice = detection.notice.unwrap();
        assert!(notice.contains("Kota Jakarta"));
        assert!(notice.starts_with("Could not determine"));
    }
}
