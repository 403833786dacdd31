//! Configuration structures and loading utilities.
//!
//! Every structure loads from environment variables with defaults suitable
//! for running the service locally.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod weather;

pub use cors::*;
pub use logging::*;
pub use metrics::*;
pub use server::*;
pub use weather::*;
