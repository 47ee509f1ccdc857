//! Soil survey client
//!
//! Integrates with a SoilGrids-compatible properties API: one query per farm
//! selection requesting the four tracked properties at the shallowest depth.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use shared::{Coordinate, RawSoilLayer, SoilProperty, SoilSample};

use crate::error::{AdapterCause, AdapterError};
use crate::external::SoilSource;

/// Soil survey API client
#[derive(Clone)]
pub struct SoilClient {
    client: Client,
    base_url: String,
}

/// Upstream response shape: properties -> layers, each layer keyed by
/// property name with a depths array whose first entry holds a nullable mean.
#[derive(Debug, Deserialize)]
struct SurveyResponse {
    properties: Option<SurveyProperties>,
}

#[derive(Debug, Deserialize)]
struct SurveyProperties {
    layers: Option<Vec<SurveyLayer>>,
}

#[derive(Debug, Deserialize)]
struct SurveyLayer {
    name: String,
    #[serde(default)]
    depths: Vec<SurveyDepth>,
}

#[derive(Debug, Deserialize)]
struct SurveyDepth {
    values: SurveyValues,
}

#[derive(Debug, Deserialize)]
struct SurveyValues {
    mean: Option<f64>,
}

impl SoilClient {
    /// Create a new SoilClient
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url("https://rest.isric.org/soilgrids/v2.0".to_string(), timeout)
    }

    /// Create a new SoilClient with custom base URL (for testing or a local
    /// proxy)
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Fetch normalized surface means for the tracked properties.
    ///
    /// Partial data is the normal case: a property with no value at this
    /// location comes back as `None`, not as an error. Only a response with
    /// no layer list at all is a failure.
    pub async fn fetch_surface_sample(
        &self,
        coordinate: Coordinate,
    ) -> Result<SoilSample, AdapterError> {
        let mut url = format!(
            "{}/properties/query?lon={}&lat={}&depth=0-5cm&value=mean",
            self.base_url, coordinate.longitude, coordinate.latitude
        );
        for property in SoilProperty::ALL {
            url.push_str("&property=");
            url.push_str(property.query_name());
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AdapterError::soil(AdapterCause::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::soil(AdapterCause::Status(status.as_u16())));
        }

        let data: SurveyResponse = response
            .json()
            .await
            .map_err(|e| AdapterError::soil(AdapterCause::MalformedPayload(e.to_string())))?;

        let layers = convert_layers(data)?;
        Ok(SoilSample::from_layers(&layers))
    }
}

/// Pull the raw layer records out of the survey response. A response with no
/// layer list at all is the one shape treated as a failure.
fn convert_layers(data: SurveyResponse) -> Result<Vec<RawSoilLayer>, AdapterError> {
    let layers = data
        .properties
        .and_then(|p| p.layers)
        .ok_or_else(|| AdapterError::soil(AdapterCause::NoLayerData))?;

    Ok(layers
        .into_iter()
        .map(|layer| RawSoilLayer {
            surface_mean: layer.depths.first().and_then(|depth| depth.values.mean),
            name: layer.name,
        })
        .collect())
}

#[async_trait]
impl SoilSource for SoilClient {
    async fn surface_sample(&self, coordinate: Coordinate) -> Result<SoilSample, AdapterError> {
        self.fetch_surface_sample(coordinate).await
    }
}
