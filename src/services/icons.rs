//! OpenWeatherMap icon codes to Font Awesome classes.

/// Class used for any code missing from the table
pub const FALLBACK_ICON: &str = "fas fa-cloud";

/// Map a provider icon code (e.g. `10d`) to a display icon class
pub fn icon_class(code: &str) -> &'static str {
    match code {
        "01d" => "fas fa-sun",
        "01n" => "fas fa-moon",
        "02d" => "fas fa-cloud-sun",
        "02n" => "fas fa-cloud-moon",
        "03d" | "03n" | "04d" | "04n" => "fas fa-cloud",
        "09d" | "09n" => "fas fa-cloud-rain",
        "10d" => "fas fa-cloud-sun-rain",
        "10n" => "fas fa-cloud-moon-rain",
        "11d" | "11n" => "fas fa-bolt",
        "13d" | "13n" => "fas fa-snowflake",
        "50d" | "50n" => "fas fa-smog",
        _ => FALLBACK_ICON,
    }
}
