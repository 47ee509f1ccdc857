//! Weather API client
//!
//! Integrates with an OpenWeatherMap-compatible API for current conditions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use shared::{Coordinate, RawWeatherSample};

use crate::error::{AdapterCause, AdapterError};
use crate::external::WeatherSource;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Upstream response for current weather. Only the fields the form consumes
/// are deserialized; anything missing fails the whole payload.
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.openweathermap.org/data/2.5".to_string(),
            timeout,
        )
    }

    /// Create a new WeatherClient with custom base URL (for testing or a
    /// local proxy)
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions by GPS coordinate.
    ///
    /// One network call per trigger: no caching, no retry. The caller decides
    /// whether a failure is surfaced or suppressed.
    pub async fn fetch_current(
        &self,
        coordinate: Coordinate,
    ) -> Result<RawWeatherSample, AdapterError> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coordinate.latitude, coordinate.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdapterError::weather(AdapterCause::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::weather(AdapterCause::Status(status.as_u16())));
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| AdapterError::weather(AdapterCause::MalformedPayload(e.to_string())))?;

        Ok(convert_current_response(data))
    }
}

/// Convert the upstream response to our format
fn convert_current_response(data: OwmCurrentResponse) -> RawWeatherSample {
    RawWeatherSample {
        temperature_celsius: data.main.temp,
        relative_humidity_percent: data.main.humidity,
    }
}

#[async_trait]
impl WeatherSource for WeatherClient {
    async fn current(&self, coordinate: Coordinate) -> Result<RawWeatherSample, AdapterError> {
        self.fetch_current(coordinate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_response() {
        let data: OwmCurrentResponse = serde_json::from_value(serde_json::json!({
            "coord": {"lat": 26.85, "lon": 80.95},
            "main": {"temp": 31.4, "humidity": 64, "pressure": 1006},
            "name": "Lucknow"
        }))
        .unwrap();

        let sample = convert_current_response(data);
        assert_eq!(sample.temperature_celsius, 31.4);
        assert_eq!(sample.relative_humidity_percent, 64.0);
    }

    #[test]
    fn test_missing_numeric_fields_fail_deserialization() {
        // humidity absent
        let result = serde_json::from_value::<OwmCurrentResponse>(serde_json::json!({
            "main": {"temp": 31.4}
        }));
        assert!(result.is_err());

        // main block absent entirely
        let result = serde_json::from_value::<OwmCurrentResponse>(serde_json::json!({
            "weather": [{"main": "Clear"}]
        }));
        assert!(result.is_err());
    }
}
