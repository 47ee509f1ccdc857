//! Geodata proxy handler
//!
//! Local intermediary between the prediction form and the external geodata
//! providers: keeps the weather API key server-side and returns each
//! upstream's JSON unchanged.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for a proxied lookup
#[derive(Debug, Default, Deserialize)]
pub struct GeodataQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// Which upstream to forward to: `weather`, `isric` or `olm`
    pub source: Option<String>,
    /// Property identifier, required for the soil sources
    pub prop: Option<String>,
}

/// Forward a lookup to the appropriate upstream.
///
/// Missing or invalid parameters are a 400; an upstream failure is a 502
/// with the transport or status detail. A successful upstream body passes
/// through unmodified.
pub async fn proxy_lookup(
    State(state): State<AppState>,
    Query(query): Query<GeodataQuery>,
) -> AppResult<Json<Value>> {
    let url = upstream_url(&state.config, &query)?;

    let response = state
        .http
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!(
            "External API failed with status: {}",
            status.as_u16()
        )));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(body))
}

/// Build the upstream URL for a validated query
fn upstream_url(config: &Config, query: &GeodataQuery) -> AppResult<String> {
    let lat = required(&query.lat, "lat")?;
    let lon = required(&query.lon, "lon")?;
    let source = required(&query.source, "source")?;

    match source {
        "weather" => {
            if config.weather.api_key.is_empty() {
                return Err(AppError::Configuration(
                    "Weather API key not configured".to_string(),
                ));
            }
            Ok(format!(
                "{}/weather?lat={}&lon={}&appid={}&units=metric",
                config.weather.api_endpoint, lat, lon, config.weather.api_key
            ))
        }
        "isric" => {
            let prop = required(&query.prop, "prop")?;
            Ok(format!(
                "{}/properties/query?lon={}&lat={}&property={}&depth=0-5cm&value=mean",
                config.soil.api_endpoint, lon, lat, prop
            ))
        }
        "olm" => {
            let prop = required(&query.prop, "prop")?;
            Ok(format!(
                "{}/query/point?lon={}&lat={}&coll={}",
                config.soil.olm_endpoint, lon, lat, prop
            ))
        }
        other => Err(AppError::Validation {
            field: "source".to_string(),
            message: format!("Invalid source: {}", other),
        }),
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> AppResult<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation {
            field: field.to_string(),
            message: format!("{} is required", field),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendConfig, GeodataConfig, ServerConfig, SoilConfig, WeatherConfig};

    fn config(api_key: &str) -> Config {
        Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            backend: BackendConfig {
                base_url: "http://localhost:8000".to_string(),
            },
            weather: WeatherConfig {
                api_endpoint: "https://weather.test/data/2.5".to_string(),
                api_key: api_key.to_string(),
            },
            soil: SoilConfig {
                api_endpoint: "https://soil.test/v2.0".to_string(),
                olm_endpoint: "https://olm.test".to_string(),
            },
            geodata: GeodataConfig {
                request_timeout_secs: 10,
            },
        }
    }

    fn query(lat: &str, lon: &str, source: &str, prop: Option<&str>) -> GeodataQuery {
        GeodataQuery {
            lat: Some(lat.to_string()),
            lon: Some(lon.to_string()),
            source: Some(source.to_string()),
            prop: prop.map(str::to_string),
        }
    }

    #[test]
    fn test_weather_url() {
        let url = upstream_url(&config("key123"), &query("18.78", "98.98", "weather", None)).unwrap();
        assert_eq!(
            url,
            "https://weather.test/data/2.5/weather?lat=18.78&lon=98.98&appid=key123&units=metric"
        );
    }

    #[test]
    fn test_isric_url_includes_depth_and_value() {
        let url =
            upstream_url(&config("k"), &query("18.78", "98.98", "isric", Some("phh2o"))).unwrap();
        assert_eq!(
            url,
            "https://soil.test/v2.0/properties/query?lon=98.98&lat=18.78&property=phh2o&depth=0-5cm&value=mean"
        );
    }

    #[test]
    fn test_olm_url() {
        let url = upstream_url(&config("k"), &query("1", "2", "olm", Some("nitrogen"))).unwrap();
        assert_eq!(url, "https://olm.test/query/point?lon=2&lat=1&coll=nitrogen");
    }

    #[test]
    fn test_missing_parameters_are_validation_errors() {
        let err = upstream_url(&config("k"), &GeodataQuery::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation { field, .. } if field == "lat"));

        let mut q = query("1", "2", "isric", None);
        let err = upstream_url(&config("k"), &q).unwrap_err();
        assert!(matches!(err, AppError::Validation { field, .. } if field == "prop"));

        q = query("1", "2", "", None);
        let err = upstream_url(&config("k"), &q).unwrap_err();
        assert!(matches!(err, AppError::Validation { field, .. } if field == "source"));
    }

    #[test]
    fn test_invalid_source_rejected() {
        let err = upstream_url(&config("k"), &query("1", "2", "copernicus", None)).unwrap_err();
        assert!(matches!(err, AppError::Validation { field, .. } if field == "source"));
    }

    #[test]
    fn test_weather_without_api_key_is_configuration_error() {
        let err = upstream_url(&config(""), &query("1", "2", "weather", None)).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
