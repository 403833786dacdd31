//! Data models for the weather proxy.
//!
//! `openweather` holds the raw provider payloads, `api` the simplified views
//! returned to the frontend.

pub mod api;
pub mod openweather;

pub use api::*;
pub use openweather::*;
