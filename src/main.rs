use actix_web::HttpServer;
use tracing::{info, warn};
use weather_proxy_api::{
    create_app, telemetry, AppMetrics, LoggingConfig, ServerConfig, WeatherConfig, WeatherService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init_tracing(&LoggingConfig::from_env()) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let server_config = ServerConfig::from_env();
    let weather_config = WeatherConfig::from_env();

    if !weather_config.is_api_key_configured() {
        warn!("OPENWEATHER_API_KEY is not set; weather requests will fail upstream");
    }

    let metrics = AppMetrics::new().map_err(|e| std::io::Error::other(e.to_string()))?;
    let weather = WeatherService::new(weather_config.clone())
        .map_err(std::io::Error::other)?
        .with_metrics(metrics.clone());

    info!(
        bind_address = %server_config.bind_address,
        api_key_configured = weather_config.is_api_key_configured(),
        upstream = %weather_config.base_url,
        "Starting weather API server"
    );
    info!("Available endpoints: GET /api/weather/current?city=CityName, GET /api/weather/forecast?city=CityName, GET /api/weather/complete?city=CityName, GET /api/health");

    HttpServer::new(move || create_app(weather.clone(), metrics.clone()))
        .bind(&server_config.bind_address)?
        .run()
        .await
}
