//! Weather endpoint handlers.
//!
//! All three endpoints accept either `?city=` or `?lat=&lon=` and share the
//! same validation and upstream error mapping.

use crate::{
    error::ApiError,
    models::{CompleteWeather, CurrentWeather, DailyForecast, Location, WeatherQuery},
    services::{forecast::aggregate_daily, weather::WeatherService},
};
use actix_web::{web, Error, Result};
use chrono::Local;
use paperclip::actix::api_v2_operation;

/// Current weather endpoint
#[api_v2_operation(
    summary = "Current Weather",
    description = "Returns current conditions for a city (?city=London) or coordinates (?lat=51.5&lon=-0.12). Wind speed is in km/h, visibility in km, temperatures in whole degrees Celsius.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = CurrentWeather),
        (status = 400, description = "Bad Request - Missing location parameters"),
        (status = 404, description = "Weather data not available")
    )
)]
pub async fn current_weather(
    service: web::Data<WeatherService>,
    query: web::Query<WeatherQuery>,
) -> Result<web::Json<CurrentWeather>, Error> {
    let location = query.location()?;
    let current = load_current(&service, &location).await?;

    Ok(web::Json(current))
}

/// Daily forecast endpoint
#[api_v2_operation(
    summary = "Daily Forecast",
    description = "Returns up to five daily summaries (high, low, dominant condition) aggregated from the provider's 3-hour forecast.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = Vec<DailyForecast>),
        (status = 400, description = "Bad Request - Missing location parameters"),
        (status = 404, description = "Forecast data not available")
    )
)]
pub async fn weather_forecast(
    service: web::Data<WeatherService>,
    query: web::Query<WeatherQuery>,
) -> Result<web::Json<Vec<DailyForecast>>, Error> {
    let location = query.location()?;
    let forecast = load_forecast(&service, &location).await?;

    Ok(web::Json(forecast))
}

/// Combined current weather and forecast endpoint
#[api_v2_operation(
    summary = "Complete Weather",
    description = "Returns current conditions and the daily forecast in one payload. If either part is unavailable, that part's error is returned.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = CompleteWeather),
        (status = 400, description = "Bad Request - Missing location parameters"),
        (status = 404, description = "Weather or forecast data not available")
    )
)]
pub async fn complete_weather(
    service: web::Data<WeatherService>,
    query: web::Query<WeatherQuery>,
) -> Result<web::Json<CompleteWeather>, Error> {
    let location = query.location()?;

    let (current, forecast) = tokio::join!(
        load_current(&service, &location),
        load_forecast(&service, &location),
    );

    Ok(web::Json(CompleteWeather {
        current: current?,
        forecast: forecast?,
    }))
}

async fn load_current(
    service: &WeatherService,
    location: &Location,
) -> Result<CurrentWeather, ApiError> {
    service
        .current(location)
        .await
        .as_ref()
        .and_then(CurrentWeather::from_conditions)
        .ok_or(ApiError::WeatherUnavailable)
}

async fn load_forecast(
    service: &WeatherService,
    location: &Location,
) -> Result<Vec<DailyForecast>, ApiError> {
    let raw = service
        .forecast(location)
        .await
        .ok_or(ApiError::ForecastUnavailable)?;

    Ok(aggregate_daily(&raw.list, &Local, Local::now().date_naive()))
}
