//! Weather Proxy API - a frontend-friendly backend for OpenWeatherMap
//!
//! The service accepts a city name or coordinates, forwards the request to
//! the upstream provider and reshapes the answer:
//! - current conditions normalized to whole units (°C, km/h, km)
//! - a five-day summary aggregated from the 3-hour forecast
//! - provider icon codes mapped to Font Awesome classes
//!
//! ## Architecture
//!
//! - `models/` - Provider payloads and frontend response models
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request IDs and request metrics
//! - `services/` - Provider client, forecast aggregation, icon mapping, metrics
//! - `utils/` - Request inspection and unit conversions
//! - `config/` - Configuration structures and environment loading
//! - `error` - HTTP error taxonomy and JSON error envelopes
//! - `telemetry` - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::HttpServer;
//! use weather_proxy_api::{create_app, AppMetrics, WeatherConfig, WeatherService};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let weather = WeatherService::new(WeatherConfig::from_env()).expect("HTTP client");
//!     let metrics = AppMetrics::new().expect("metrics registry");
//!
//!     HttpServer::new(move || create_app(weather.clone(), metrics.clone()))
//!         .bind("0.0.0.0:5000")?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{CorsConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig, WeatherConfig};
pub use error::ApiError;
pub use handlers::{
    complete_weather, create_app, create_openapi_spec, current_weather, get_metrics, health,
    weather_forecast,
};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware};
pub use models::{
    CompleteWeather, CurrentConditions, CurrentWeather, DailyForecast, ErrorResponse,
    ForecastEntry, ForecastResponse, HealthResponse, Location, WeatherQuery,
};
pub use services::{
    aggregate_daily, icon_class, AppMetrics, UpstreamEndpoint, UpstreamError, WeatherService,
};
