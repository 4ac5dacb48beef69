//! Raw provider payloads.
//!
//! Serde mirrors of the OpenWeather `/weather` and `/forecast` JSON bodies,
//! limited to the fields the dashboard actually displays. Unknown fields are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Body of a successful `/weather` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPayload {
    pub name: String,
    pub sys: Sys,
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
}

/// Shared `main` block of both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Body of a successful `/forecast` response.
///
/// The provider reports entries in fixed time steps (3 hours on the free
/// tier); one calendar day spans several consecutive entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastEntry>,
    pub city: City,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp of the forecast slot.
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_payload_parses_provider_json() {
        let body = r#"{
            "name": "Paris",
            "sys": {"country": "FR"},
            "main": {"temp": 21.6, "feels_like": 20.9, "humidity": 56, "pressure": 1013},
            "weather": [{"id": 800, "description": "clear sky", "icon": "01d"}],
            "wind": {"speed": 3.5},
            "cod": 200
        }"#;

        let parsed: CurrentPayload = serde_json::from_str(body).expect("should parse");
        assert_eq!(parsed.name, "Paris");
        assert_eq!(parsed.sys.country, "FR");
        assert_eq!(parsed.main.humidity, 56);
        assert_eq!(parsed.weather[0].icon, "01d");
    }

    #[test]
    fn forecast_payload_parses_provider_json() {
        let body = r#"{
            "cod": "200",
            "list": [
                {
                    "dt": 1705320000,
                    "main": {"temp": 22.0, "feels_like": 21.0, "humidity": 65, "pressure": 1013},
                    "weather": [{"description": "partly cloudy", "icon": "02d"}]
                }
            ],
            "city": {"name": "New York", "country": "US"}
        }"#;

        let parsed: ForecastPayload = serde_json::from_str(body).expect("should parse");
        assert_eq!(parsed.list.len(), 1);
        assert_eq!(parsed.list[0].dt, 1_705_320_000);
        assert_eq!(parsed.city.name, "New York");
    }
}
