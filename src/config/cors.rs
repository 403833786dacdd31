//! Cross-origin resource sharing configuration.

use crate::middleware::REQUEST_ID_HEADER;
use actix_cors::Cors;
use std::env;

/// Configuration for the CORS middleware
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: String,
    pub allowed_methods: String,
    pub max_age: u32,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "*".to_string(),
            allowed_methods: "GET, OPTIONS".to_string(),
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_origin =
            env::var("CORS_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin);

        let max_age = env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_age);

        Self {
            allowed_origin,
            allowed_methods: defaults.allowed_methods,
            max_age,
        }
    }

    /// Build the CORS middleware
    ///
    /// `*` allows any origin and answers with a literal wildcard. The request
    /// ID header is exposed so browser clients can read it.
    pub fn middleware(&self) -> Cors {
        let cors = Cors::default()
            .allowed_methods(self.allowed_methods.split(',').map(str::trim))
            .allow_any_header()
            .expose_headers([REQUEST_ID_HEADER])
            .max_age(self.max_age as usize);

        if self.allowed_origin == "*" {
            cors.allow_any_origin().send_wildcard()
        } else {
            cors.allowed_origin(&self.allowed_origin)
        }
    }
}
