pub mod detector;
pub mod geocode;
pub mod geoip;

pub use detector::{detect_city, Detection};
