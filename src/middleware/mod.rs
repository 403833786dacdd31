//! Custom middleware implementations for the API.
//!
//! Request IDs for log correlation and Prometheus request metrics. CORS is
//! handled by `actix-cors`, built from [`crate::config::CorsConfig`].

pub mod metrics;
pub mod request_id;

pub use metrics::*;
pub use request_id::*;
