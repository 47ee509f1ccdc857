//! Configuration management for the AgroYield application
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGROYIELD_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Proxy server configuration
    pub server: ServerConfig,

    /// Remote prediction backend configuration
    pub backend: BackendConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// Soil survey provider configuration
    pub soil: SoilConfig,

    /// Outbound geodata request behavior
    pub geodata: GeodataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the remote farm/prediction backend
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key, attached server-side by the proxy
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SoilConfig {
    /// Soil survey properties endpoint
    pub api_endpoint: String,

    /// Alternate point-query soil upstream
    pub olm_endpoint: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeodataConfig {
    /// Timeout applied to each outbound geodata request, in seconds.
    /// One attempt per lookup; a timed-out request is surfaced, never retried.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGROYIELD_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("backend.base_url", "http://localhost:8000")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.api_key", "")?
            .set_default("soil.api_endpoint", "https://rest.isric.org/soilgrids/v2.0")?
            .set_default("soil.olm_endpoint", "https://api.openlandmap.org")?
            .set_default("geodata.request_timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGROYIELD_ prefix)
            .add_source(
                Environment::with_prefix("AGROYIELD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
