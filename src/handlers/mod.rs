//! HTTP request handlers for API endpoints.
//!
//! This module contains the HTTP request handlers and the app factory that
//! wires them to their routes.

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod weather;

pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use weather::*;
