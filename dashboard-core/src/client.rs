//! Weather API client.
//!
//! Translates a validated city name into the two provider fetches — current
//! conditions and the 5-day/3-hour forecast — issued concurrently and joined
//! fail-fast. Every failure is surfaced as a structured [`ClientError`] so
//! the orchestrator can classify it without inspecting message text.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::ClientError,
    payload::{CurrentPayload, ForecastPayload},
};

/// Fetch seam between the orchestrator and the HTTP client.
#[async_trait]
pub trait WeatherFetch: Send + Sync {
    /// Fetch current conditions and the forecast for one city, concurrently.
    /// Fails fast: if either request fails, the whole fetch fails.
    async fn fetch_pair(
        &self,
        city: &str,
    ) -> Result<(CurrentPayload, ForecastPayload), ClientError>;
}

/// HTTP client for the OpenWeather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: Config,
}

impl OpenWeatherClient {
    pub fn new(config: Config) -> Self {
        Self { http: Client::new(), config }
    }

    /// GET one endpoint with the standard query parameters and return the
    /// body as JSON, after the HTTP status and the embedded provider status
    /// have both been checked.
    async fn get_json(&self, endpoint: &str, city: &str) -> Result<Value, ClientError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        debug!(url = %url, city = %city, "requesting weather data");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), body = %truncate_body(&body), "provider rejected request");
            return Err(ClientError::Status { status: status.as_u16(), body });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        // The provider embeds its own status code in 200 bodies; `cod` is a
        // number on /weather and a string on /forecast.
        if let Some(cod) = embedded_cod(&value) {
            if cod != 200 {
                let message = value
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("API request failed")
                    .to_string();
                return Err(ClientError::Provider { cod: cod.to_string(), message });
            }
        }

        Ok(value)
    }

    pub async fn fetch_current(&self, city: &str) -> Result<CurrentPayload, ClientError> {
        let value = self.get_json("weather", city).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub async fn fetch_forecast(&self, city: &str) -> Result<ForecastPayload, ClientError> {
        let value = self.get_json("forecast", city).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[async_trait]
impl WeatherFetch for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_pair(
        &self,
        city: &str,
    ) -> Result<(CurrentPayload, ForecastPayload), ClientError> {
        tokio::try_join!(self.fetch_current(city), self.fetch_forecast(city))
    }
}

fn embedded_cod(value: &Value) -> Option<i64> {
    match value.get("cod")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary; localized bodies are multi-byte.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_cod_reads_number_and_string_forms() {
        assert_eq!(embedded_cod(&json!({"cod": 200})), Some(200));
        assert_eq!(embedded_cod(&json!({"cod": "200"})), Some(200));
        assert_eq!(embedded_cod(&json!({"cod": 401})), Some(401));
        assert_eq!(embedded_cod(&json!({"cod": "404"})), Some(404));
        assert_eq!(embedded_cod(&json!({"name": "Paris"})), None);
        assert_eq!(embedded_cod(&json!({"cod": true})), None);
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 300 bytes of 3-byte chars: byte 200 falls inside a character.
        let long = "€".repeat(100);
        let truncated = truncate_body(&long);

        assert!(truncated.ends_with("..."));
        // 66 whole characters fit below the 200-byte cap.
        assert_eq!(truncated.chars().count(), 66 + 3);

        // 2-byte chars: byte 200 is a boundary, all 100 chars kept.
        let exact = "é".repeat(150);
        assert_eq!(truncate_body(&exact).chars().count(), 100 + 3);
    }
}
