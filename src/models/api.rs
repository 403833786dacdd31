//! API request and response models exposed to the frontend.

use crate::{
    error::ApiError,
    models::openweather::CurrentConditions,
    services::icons::icon_class,
    utils::units::{ms_to_kmh, round_half_even, visibility_km},
};
use paperclip::actix::Apiv2Schema;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor},
};
use std::fmt;

/// UV index reported for every location until a UV data source is wired in.
pub const UV_INDEX_PLACEHOLDER: u8 = 5;

/// Request query parameters shared by the weather endpoints
///
/// When a parameter is repeated the first occurrence is kept; unknown
/// parameters are ignored.
#[derive(Debug, Clone, Default, Serialize, Apiv2Schema)]
pub struct WeatherQuery {
    /// City name (e.g., "London")
    pub city: Option<String>,
    /// Latitude coordinate
    pub lat: Option<String>,
    /// Longitude coordinate
    pub lon: Option<String>,
}

impl<'de> Deserialize<'de> for WeatherQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct QueryVisitor;

        impl<'de> Visitor<'de> for QueryVisitor {
            type Value = WeatherQuery;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("weather query parameters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<WeatherQuery, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut query = WeatherQuery::default();

                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    let slot = match key.as_str() {
                        "city" => &mut query.city,
                        "lat" => &mut query.lat,
                        "lon" => &mut query.lon,
                        _ => continue,
                    };
                    if slot.is_none() {
                        *slot = Some(value);
                    }
                }

                Ok(query)
            }
        }

        deserializer.deserialize_map(QueryVisitor)
    }
}

/// A resolved location to query the provider for
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    City(String),
    /// Forwarded to the provider as given
    Coordinates { lat: String, lon: String },
}

impl WeatherQuery {
    /// Resolve the query into a single location.
    ///
    /// A non-empty city wins over coordinates. Latitude and longitude are
    /// only considered when both are present and non-empty; their values are
    /// left for the provider to reject.
    pub fn location(&self) -> Result<Location, ApiError> {
        if let Some(city) = non_empty(&self.city) {
            return Ok(Location::City(city.to_string()));
        }

        let (Some(lat), Some(lon)) = (non_empty(&self.lat), non_empty(&self.lon)) else {
            return Err(ApiError::MissingLocation);
        };

        Ok(Location::Coordinates {
            lat: lat.to_string(),
            lon: lon.to_string(),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Normalized current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub city: String,
    pub country: String,
    /// Degrees Celsius
    pub temperature: i64,
    pub feels_like: i64,
    pub description: String,
    /// Percent
    pub humidity: u32,
    /// Kilometers per hour
    pub wind_speed: i64,
    /// hPa
    pub pressure: u32,
    /// Kilometers
    pub visibility: i64,
    /// Cloud cover percent
    pub cloudiness: u32,
    /// Font Awesome icon class
    pub icon: String,
    pub uv_index: u8,
}

impl CurrentWeather {
    /// Reshape a provider record. Returns `None` when the record carries no
    /// weather condition to describe.
    pub fn from_conditions(raw: &CurrentConditions) -> Option<Self> {
        let condition = raw.primary_condition()?;

        Some(Self {
            city: raw.name.clone(),
            country: raw.sys.country.clone(),
            temperature: round_half_even(raw.main.temp),
            feels_like: round_half_even(raw.main.feels_like),
            description: condition.description.clone(),
            humidity: raw.main.humidity,
            wind_speed: ms_to_kmh(raw.wind.speed),
            pressure: raw.main.pressure,
            visibility: visibility_km(raw.visibility),
            cloudiness: raw.clouds.all,
            icon: icon_class(&condition.icon).to_string(),
            uv_index: UV_INDEX_PLACEHOLDER,
        })
    }
}

/// One day of the aggregated forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct DailyForecast {
    /// "Today", "Tomorrow" or a weekday name
    pub day: String,
    pub high: i64,
    pub low: i64,
    pub description: String,
    pub icon: String,
}

/// Current conditions and forecast in a single payload
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CompleteWeather {
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
}

/// Response model for the health check endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 server time
    pub timestamp: String,
    pub api_key_configured: bool,
}

/// JSON error envelope
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    fn query(city: Option<&str>, lat: Option<&str>, lon: Option<&str>) -> WeatherQuery {
        WeatherQuery {
            city: city.map(String::from),
            lat: lat.map(String::from),
            lon: lon.map(String::from),
        }
    }

    fn london() -> CurrentConditions {
        serde_json::from_value(serde_json::json!({
            "weather": [{"description": "light rain", "icon": "10d"}],
            "main": {"temp": 15.3, "feels_like": 14.1, "pressure": 1012, "humidity": 72},
            "visibility": 8000,
            "wind": {"speed": 5.2},
            "clouds": {"all": 75},
            "sys": {"country": "GB"},
            "name": "London"
        }))
        .unwrap()
    }

    #[test]
    fn test_location_prefers_city() {
        let location = query(Some("Paris"), Some("1"), Some("2")).location();
        assert_eq!(location, Ok(Location::City("Paris".to_string())));
    }

    #[test]
    fn test_location_coordinates() {
        let location = query(None, Some("51.5"), Some("-0.12")).location();
        assert_eq!(
            location,
            Ok(Location::Coordinates {
                lat: "51.5".to_string(),
                lon: "-0.12".to_string()
            })
        );
    }

    #[test]
    fn test_location_missing() {
        assert_eq!(query(None, None, None).location(), Err(ApiError::MissingLocation));
        assert_eq!(query(Some(""), None, None).location(), Err(ApiError::MissingLocation));
        assert_eq!(query(None, Some("51.5"), None).location(), Err(ApiError::MissingLocation));
        assert_eq!(query(None, None, Some("0.1")).location(), Err(ApiError::MissingLocation));
        assert_eq!(query(None, Some(""), Some("0.1")).location(), Err(ApiError::MissingLocation));
    }

    #[test]
    fn test_query_keeps_first_repeated_value() {
        let query = web::Query::<WeatherQuery>::from_query("city=London&city=Paris&units=imperial")
            .unwrap()
            .into_inner();
        assert_eq!(query.city.as_deref(), Some("London"));

        let query = web::Query::<WeatherQuery>::from_query("lat=1&lat=2&lon=3")
            .unwrap()
            .into_inner();
        assert_eq!(query.lat.as_deref(), Some("1"));
        assert_eq!(query.lon.as_deref(), Some("3"));
    }

    #[test]
    fn test_query_decodes_values() {
        let query = web::Query::<WeatherQuery>::from_query("city=S%C3%A3o+Paulo")
            .unwrap()
            .into_inner();
        assert_eq!(query.city.as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_location_keeps_raw_coordinates() {
        assert_eq!(
            query(None, Some("north"), Some("200")).location(),
            Ok(Location::Coordinates {
                lat: "north".to_string(),
                lon: "200".to_string()
            })
        );
    }

    #[test]
    fn test_current_weather_from_london() {
        let current = CurrentWeather::from_conditions(&london()).unwrap();

        assert_eq!(current.city, "London");
        assert_eq!(current.country, "GB");
        assert_eq!(current.temperature, 15);
        assert_eq!(current.feels_like, 14);
        assert_eq!(current.wind_speed, 19);
        assert_eq!(current.visibility, 8);
        assert_eq!(current.humidity, 72);
        assert_eq!(current.pressure, 1012);
        assert_eq!(current.cloudiness, 75);
        assert_eq!(current.icon, "fas fa-cloud-sun-rain");
        assert_eq!(current.uv_index, 5);
    }

    #[test]
    fn test_current_weather_default_visibility() {
        let mut raw = london();
        raw.visibility = None;

        let current = CurrentWeather::from_conditions(&raw).unwrap();
        assert_eq!(current.visibility, 10);
    }

    #[test]
    fn test_current_weather_without_conditions() {
        let mut raw = london();
        raw.weather.clear();

        assert!(CurrentWeather::from_conditions(&raw).is_none());
    }

    #[test]
    fn test_current_weather_serializes_camel_case() {
        let current = CurrentWeather::from_conditions(&london()).unwrap();
        let json = serde_json::to_value(&current).unwrap();

        assert_eq!(json["feelsLike"], 14);
        assert_eq!(json["windSpeed"], 19);
        assert_eq!(json["uvIndex"], 5);
        assert!(json.get("feels_like").is_none());
    }
}
