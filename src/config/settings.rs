use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

use crate::api::MYQURAN_BASE_URL;
use crate::models::City;

fn default_base_url() -> String {
    MYQURAN_BASE_URL.to_string()
}
fn default_city_id() -> String {
    "1301".to_string()
}
fn default_city_name() -> String {
    "Kota Jakarta".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// City used whenever detection fails or is disabled.
    #[serde(default = "default_city_id")]
    pub default_city_id: String,
    #[serde(default = "default_city_name")]
    pub default_city_name: String,
    /// Run IP-based location detection on startup.
    #[serde(default = "default_true")]
    pub auto_detect: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            default_city_id: default_city_id(),
            default_city_name: default_city_name(),
            auto_detect: true,
        }
    }
}

impl LocationConfig {
    pub fn default_city(&self) -> City {
        City::new(&self.default_city_id, &self.default_city_name)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "jadwal").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_jakarta() {
        let config = AppConfig::default();
        let city = config.location.default_city();
        assert_eq!(city.id, "1301");
        assert_eq!(city.name, "Kota Jakarta");
        assert!(config.location.auto_detect);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [location]
            default_city_id = "1219"
            default_city_name = "Kota Bandung"
            "#,
        )
        .unwrap();
        assert_eq!(config.location.default_city_id, "1219");
        assert!(config.location.auto_detect);
        assert_eq!(config.api.base_url, MYQURAN_BASE_URL);
    }
}
