//! OpenAPI specification generation and app factory.

use crate::{
    config::{CorsConfig, MetricsConfig},
    error::{not_found, render_internal_error},
    handlers::{complete_weather, current_weather, get_metrics, health, weather_forecast},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, WeatherService},
};
use actix_web::{
    App,
    http::StatusCode,
    middleware::{Compat, ErrorHandlers},
    web::route,
};
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Proxy API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Frontend-friendly proxy for the OpenWeatherMap API.\n\n\
                ## Locations\n\
                Every weather endpoint accepts either `city` or both `lat` and `lon`. \
                When both forms are present the city is used.\n\
                \n\
                ## Errors\n\
                Errors are returned as `{\"error\": \"<message>\"}`:\n\
                - `400` when no usable location was supplied\n\
                - `404` when the provider returned no usable data, or the endpoint does not exist\n\
                - `500` for unexpected failures\n\
                \n\
                ## Known limitations\n\
                `uvIndex` is a fixed placeholder and not a measurement.".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with every route and middleware registered
///
/// Shared by `main` and the integration tests. The weather service and
/// metrics collector are built once by the caller and cloned per worker.
pub fn create_app(
    weather: WeatherService,
    metrics: AppMetrics,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors_config = CorsConfig::from_env();
    let metrics_config = MetricsConfig::from_env();

    App::new()
        .wrap(ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error))
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap(Compat::new(cors_config.middleware()))
        .default_service(route().to(not_found))
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(weather))
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics))
        .service(web::resource("/api/weather/current").route(web::get().to(current_weather)))
        .service(web::resource("/api/weather/forecast").route(web::get().to(weather_forecast)))
        .service(web::resource("/api/weather/complete").route(web::get().to(complete_weather)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
