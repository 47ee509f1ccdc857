//! External API integrations

pub mod backend;
pub mod soil;
pub mod weather;

pub use backend::{BackendClient, Session};
pub use soil::SoilClient;
pub use weather::WeatherClient;

use async_trait::async_trait;
use shared::{Coordinate, RawWeatherSample, SoilSample};

use crate::error::AdapterError;

/// Port for the weather lookup, implemented by [`WeatherClient`] and by
/// scripted fakes in tests.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, coordinate: Coordinate) -> Result<RawWeatherSample, AdapterError>;
}

/// Port for the soil survey lookup.
#[async_trait]
pub trait SoilSource: Send + Sync {
    async fn surface_sample(&self, coordinate: Coordinate) -> Result<SoilSample, AdapterError>;
}
