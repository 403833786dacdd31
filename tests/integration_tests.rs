//! Integration tests for the application shell: health, routing fallbacks,
//! CORS, request IDs, metrics and the OpenAPI document.

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use weather_proxy_api::{create_app, AppMetrics, WeatherConfig, WeatherService};

/// Weather service that never gets called by these tests
fn offline_service(api_key: &str) -> WeatherService {
    WeatherService::new(WeatherConfig {
        api_key: api_key.to_string(),
        ..WeatherConfig::default()
    })
    .expect("Failed to create weather service")
}

/// Integration test for the health check endpoint
///
/// Uses the full app factory so the middleware stack and OpenAPI wrapping
/// are exercised along with the handler.
#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(
        offline_service("your_api_key_here"),
        AppMetrics::new().unwrap(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("Content-Type header should be present")
        .to_str()
        .unwrap();
    assert!(
        content_type.contains("application/json"),
        "Expected JSON content type, got: {content_type}"
    );

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["api_key_configured"], false);

    let timestamp = json["timestamp"].as_str().expect("timestamp should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp should be RFC 3339, got: {timestamp}"
    );
}

#[actix_web::test]
async fn test_health_reports_configured_key() {
    let app = test::init_service(create_app(
        offline_service("0123456789abcdef"),
        AppMetrics::new().unwrap(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(json["api_key_configured"], true);
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    for uri in ["/", "/api/weather", "/api/weather/hourly?city=London"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Endpoint not found"}), "{uri}");
    }
}

#[actix_web::test]
async fn test_cors_allows_any_origin() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[actix_web::test]
async fn test_cors_exposes_request_id() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let exposed = resp
        .headers()
        .get("access-control-expose-headers")
        .expect("Exposed headers should be advertised")
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(exposed.contains("x-request-id"), "got: {exposed}");
    assert!(resp.headers().contains_key("x-request-id"));
}

#[actix_web::test]
async fn test_cors_on_error_responses() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get()
        .uri("/api/weather/current")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[actix_web::test]
async fn test_cors_preflight() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/weather/current?city=London")
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "GET"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success(), "got {}", resp.status());
    let headers = resp.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert!(
        headers
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("GET")
    );
    assert_eq!(headers.get("access-control-max-age").unwrap(), "3600");
}

#[actix_web::test]
async fn test_request_id_header() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp
        .headers()
        .get("x-request-id")
        .expect("Request ID should be generated")
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "frontend-1234"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "frontend-1234");
}

#[actix_web::test]
async fn test_metrics_endpoint() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("http_requests_total"));
    assert!(body_str.contains(r#"route="/api/health""#));
    assert!(body_str.contains("app_uptime_seconds"));
}

#[actix_web::test]
async fn test_openapi_spec_lists_weather_routes() {
    let app = test::init_service(create_app(offline_service("key"), AppMetrics::new().unwrap())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let spec: Value = test::read_body_json(resp).await;
    assert_eq!(spec["info"]["title"], "Weather Proxy API");
    for route in [
        "/api/weather/current",
        "/api/weather/forecast",
        "/api/weather/complete",
        "/api/health",
    ] {
        assert!(spec["paths"].get(route).is_some(), "missing {route}");
    }
}
