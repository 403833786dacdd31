//! Unit conversion and rounding helpers for the normalized views.

/// Visibility assumed when the provider omits it, in meters.
pub const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;

/// Round to the nearest integer, ties to even.
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Convert meters per second to whole kilometers per hour.
pub fn ms_to_kmh(speed: f64) -> i64 {
    round_half_even(speed * 3.6)
}

/// Convert meters to whole kilometers, defaulting missing readings.
pub fn visibility_km(meters: Option<f64>) -> i64 {
    round_half_even(meters.unwrap_or(DEFAULT_VISIBILITY_METERS) / 1000.0)
}
