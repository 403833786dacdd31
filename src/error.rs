//! HTTP error taxonomy and JSON error envelopes.

use crate::{middleware::RequestId, models::ErrorResponse};
use actix_web::{
    HttpMessage, HttpResponse, ResponseError,
    body::BoxBody,
    dev::ServiceResponse,
    http::StatusCode,
    middleware::ErrorHandlerResponse,
};

/// Errors surfaced to API clients
///
/// Every upstream failure cause collapses into the `*Unavailable` variants;
/// the distinct cause is only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("City name or coordinates required")]
    MissingLocation,

    #[error("Weather data not available")]
    WeatherUnavailable,

    #[error("Forecast data not available")]
    ForecastUnavailable,

    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingLocation => StatusCode::BAD_REQUEST,
            ApiError::WeatherUnavailable
            | ApiError::ForecastUnavailable
            | ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> HttpResponse {
    ApiError::EndpointNotFound.error_response()
}

/// Replace the body of any 500 response with the JSON error envelope
pub fn render_internal_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let request_id = res
        .request()
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    tracing::error!(
        request_id = %request_id,
        path = %res.request().path(),
        "Unhandled internal error"
    );

    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, ApiError::Internal.error_response()).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}
