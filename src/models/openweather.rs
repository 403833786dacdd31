//! Raw OpenWeatherMap payloads.
//!
//! Only the fields the service reshapes are declared; everything else in the
//! provider response is ignored during deserialization.

use serde::Deserialize;

/// Response of the `/weather` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub sys: CountryInfo,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    /// Meters; omitted by the provider when unknown
    pub visibility: Option<f64>,
    pub clouds: Clouds,
}

impl CurrentConditions {
    /// The primary condition reported by the provider
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryInfo {
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Meters per second in metric units
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    pub all: u32,
}

/// Response of the `/forecast` endpoint (3-hour steps, ~5 days)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp, seconds
    pub dt: i64,
    pub main: ForecastReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastReadings {
    pub temp: f64,
}
