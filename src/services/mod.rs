//! Business logic and service layer modules.
//!
//! The provider client, the forecast aggregation and icon mapping it feeds,
//! and the metrics collector shared by the middleware.

pub mod forecast;
pub mod icons;
pub mod metrics;
pub mod weather;

pub use forecast::*;
pub use icons::*;
pub use metrics::*;
pub use weather::*;
