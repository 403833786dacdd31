//! Upstream weather provider configuration.

use std::env;

/// Value shipped in deployment templates before a real key is supplied.
pub const API_KEY_PLACEHOLDER: &str = "your_api_key_here";

/// OpenWeatherMap 2.5 REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Outbound request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the upstream weather provider
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: API_KEY_PLACEHOLDER.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl WeatherConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .unwrap_or_else(|_| API_KEY_PLACEHOLDER.to_string());

        let base_url = env::var("OPENWEATHER_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = env::var("OPENWEATHER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            api_key,
            base_url,
            timeout_seconds,
        }
    }

    /// Whether a real credential has been supplied
    pub fn is_api_key_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != API_KEY_PLACEHOLDER
    }
}
