//! Utility functions and helper modules.
//!
//! Request inspection helpers used by the middleware, plus the unit
//! conversions applied when reshaping provider data.

pub mod http;
pub mod route;
pub mod units;

pub use http::*;
pub use route::*;
pub use units::*;
