//! Health check endpoint handler.

use crate::{models::HealthResponse, services::weather::WeatherService};
use actix_web::{web, Error, Result};
use chrono::Utc;
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Always answers 200; `api_key_configured` tells operators whether the
/// provider credential still holds the placeholder value.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the service status, the server time and whether the weather provider API key is configured.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health(service: web::Data<WeatherService>) -> Result<web::Json<HealthResponse>, Error> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        api_key_configured: service.config().is_api_key_configured(),
    };

    Ok(web::Json(response))
}
