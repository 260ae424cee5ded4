use reqwest::Url;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://heavens-above.com/PassSummary.aspx";
pub const ISS_NORAD_ID: u32 = 25544;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub satellite_id: u32,
    pub observer: ObserverConfig,
    pub base_url: String,
    /// Sent as `Accept-Language`; the month table and the compass points
    /// only match the Spanish rendering of the page.
    pub language: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    pub months: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            satellite_id: ISS_NORAD_ID,
            observer: ObserverConfig::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "es".to_string(),
            timeout: Duration::from_secs(20),
            months: "ene feb mar abr may jun jul ago sep oct nov dic"
                .split_whitespace()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub coordinates: String,
    pub altitude_m: f64,
    pub location_name: String,
    pub timezone: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            coordinates: "3.3474,-76.5315".to_string(),
            altitude_m: 1000.0,
            location_name: "Unnamed".to_string(),
            timezone: "UCT5".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

impl Observer {
    pub fn from_coordinates(coordinates: &str, altitude_m: Option<f64>) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return None;
        }
        let lat: f64 = parts[0].parse().ok()?;
        let lon: f64 = parts[1].parse().ok()?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self {
            latitude_deg: lat,
            longitude_deg: lon,
            altitude_m: altitude_m.unwrap_or(0.0),
        })
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.months.len() != 12 {
            return Err(ConfigError::Invalid(format!(
                "expected 12 month abbreviations, got {}",
                self.months.len()
            )));
        }
        self.observer()?;
        Ok(())
    }

    pub fn observer(&self) -> Result<Observer, ConfigError> {
        Observer::from_coordinates(
            &self.observer.coordinates,
            Some(self.observer.altitude_m),
        )
        .ok_or_else(|| {
            ConfigError::Invalid(format!(
                "bad observer coordinates: {:?}",
                self.observer.coordinates
            ))
        })
    }

    /// Pass summary URL for the configured satellite and observer.
    pub fn pass_summary_url(&self) -> Result<Url, ConfigError> {
        let observer = self.observer()?;
        Url::parse_with_params(
            &self.base_url,
            &[
                ("satid", self.satellite_id.to_string()),
                ("lat", observer.latitude_deg.to_string()),
                ("lng", observer.longitude_deg.to_string()),
                ("loc", self.observer.location_name.clone()),
                ("alt", observer.altitude_m.to_string()),
                ("tz", self.observer.timezone.clone()),
            ],
        )
        .map_err(|e| ConfigError::Invalid(format!("bad base_url {:?}: {}", self.base_url, e)))
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}
