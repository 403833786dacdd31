//! Upstream weather provider client.
//!
//! Every call issues a single GET with a bounded timeout. Failures are logged
//! and reported to callers as `None`, so handlers only distinguish "data" from
//! "no data".

use crate::{
    config::WeatherConfig,
    models::{CurrentConditions, ForecastResponse, Location},
    services::metrics::AppMetrics,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Provider endpoints used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    Current,
    Forecast,
}

impl UpstreamEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            UpstreamEndpoint::Current => "weather",
            UpstreamEndpoint::Forecast => "forecast",
        }
    }
}

/// Reasons an upstream call produced no usable data
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Failed to decode upstream response: {0}")]
    Decode(reqwest::Error),

    #[error("Upstream response contained no weather conditions")]
    MissingConditions,
}

impl UpstreamError {
    /// Short label used for the upstream outcome metric
    pub fn outcome(&self) -> &'static str {
        match self {
            UpstreamError::InvalidUrl(_) => "invalid_url",
            UpstreamError::Timeout => "timeout",
            UpstreamError::Network(_) => "network_error",
            UpstreamError::Status(_) => "http_status",
            UpstreamError::Decode(_) | UpstreamError::MissingConditions => "decode_error",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else if e.is_decode() {
            UpstreamError::Decode(e)
        } else {
            UpstreamError::Network(e)
        }
    }
}

/// Client for the OpenWeatherMap REST API
///
/// Holds only immutable configuration and a pooled HTTP client, so a single
/// instance is shared by every worker.
#[derive(Clone)]
pub struct WeatherService {
    client: Client,
    config: WeatherConfig,
    metrics: Option<AppMetrics>,
}

impl WeatherService {
    /// Create a new weather service instance
    pub fn new(config: WeatherConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            config,
            metrics: None,
        })
    }

    /// Record upstream outcomes into the given metrics collector
    pub fn with_metrics(mut self, metrics: AppMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Fetch current conditions, or `None` if the provider gave no usable data
    pub async fn current(&self, location: &Location) -> Option<CurrentConditions> {
        let result = self
            .fetch::<CurrentConditions>(UpstreamEndpoint::Current, location)
            .await
            .and_then(|current| {
                if current.weather.is_empty() {
                    Err(UpstreamError::MissingConditions)
                } else {
                    Ok(current)
                }
            });

        self.settle(UpstreamEndpoint::Current, location, result)
    }

    /// Fetch the 3-hour forecast, or `None` if the provider gave no usable data
    pub async fn forecast(&self, location: &Location) -> Option<ForecastResponse> {
        let result = self
            .fetch::<ForecastResponse>(UpstreamEndpoint::Forecast, location)
            .await;

        self.settle(UpstreamEndpoint::Forecast, location, result)
    }

    /// Build the request URL including credentials and metric units
    pub fn request_url(
        &self,
        endpoint: UpstreamEndpoint,
        location: &Location,
    ) -> Result<Url, UpstreamError> {
        let base = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint.path());

        let mut params: Vec<(&str, String)> = match location {
            Location::City(city) => vec![("q", city.clone())],
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.clone()), ("lon", lon.clone())]
            }
        };
        params.push(("appid", self.config.api_key.clone()));
        params.push(("units", "metric".to_string()));

        Ok(Url::parse_with_params(&base, &params)?)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: UpstreamEndpoint,
        location: &Location,
    ) -> Result<T, UpstreamError> {
        let url = self.request_url(endpoint, location)?;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(UpstreamError::Decode)
    }

    fn settle<T>(
        &self,
        endpoint: UpstreamEndpoint,
        location: &Location,
        result: Result<T, UpstreamError>,
    ) -> Option<T> {
        let outcome = match &result {
            Ok(_) => {
                debug!(endpoint = endpoint.path(), location = ?location, "Upstream request succeeded");
                "success"
            }
            Err(e) => {
                warn!(
                    endpoint = endpoint.path(),
                    location = ?location,
                    destination = %self.destination(),
                    error = %e,
                    "Error fetching weather data"
                );
                e.outcome()
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_upstream(endpoint.path(), outcome);
        }

        result.ok()
    }

    /// Host of the configured provider, for logs
    fn destination(&self) -> String {
        Url::parse(&self.config.base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "invalid_url".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> WeatherService {
        WeatherService::new(WeatherConfig {
            api_key: "test-key".to_string(),
            base_url: "https://api.test.com/data/2.5".to_string(),
            timeout_seconds: 10,
        })
        .unwrap()
    }

    #[test]
    fn test_city_url() {
        let url = service()
            .request_url(UpstreamEndpoint::Current, &Location::City("São Paulo".to_string()))
            .unwrap();

        assert_eq!(url.path(), "/data/2.5/weather");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "São Paulo".to_string()),
                ("appid".to_string(), "test-key".to_string()),
                ("units".to_string(), "metric".to_string()),
            ]
        );
    }

    #[test]
    fn test_coordinates_url() {
        let url = service()
            .request_url(
                UpstreamEndpoint::Forecast,
                &Location::Coordinates {
                    lat: "51.5".to_string(),
                    lon: "-0.12".to_string(),
                },
            )
            .unwrap();

        assert_eq!(url.path(), "/data/2.5/forecast");
        assert_eq!(
            url.query(),
            Some("lat=51.5&lon=-0.12&appid=test-key&units=metric")
        );
    }

    #[test]
    fn test_destination() {
        assert_eq!(service().destination(), "api.test.com");
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(UpstreamError::Timeout.outcome(), "timeout");
        assert_eq!(UpstreamError::Status(404).outcome(), "http_status");
        assert_eq!(UpstreamError::MissingConditions.outcome(), "decode_error");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_none() {
        let service = WeatherService::new(WeatherConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_seconds: 2,
        })
        .unwrap();

        assert!(service.current(&Location::City("London".to_string())).await.is_none());
    }
}
