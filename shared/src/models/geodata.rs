//! Geodata types produced by the external lookup adapters
//!
//! Everything here is ephemeral: produced per farm selection, merged into the
//! form, and dropped. Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::units;

/// Soil properties tracked by the prediction form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilProperty {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
}

impl SoilProperty {
    pub const ALL: [SoilProperty; 4] = [
        SoilProperty::Nitrogen,
        SoilProperty::Phosphorus,
        SoilProperty::Potassium,
        SoilProperty::Ph,
    ];

    /// Layer name used by the soil survey API for this property
    pub fn query_name(&self) -> &'static str {
        match self {
            SoilProperty::Nitrogen => "nitrogen",
            SoilProperty::Phosphorus => "p",
            SoilProperty::Potassium => "k",
            SoilProperty::Ph => "phh2o",
        }
    }
}

/// One property layer as reported by the soil survey, before unit
/// normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSoilLayer {
    pub name: String,
    /// Mean of the shallowest depth interval; `None` when the survey has no
    /// data at this location.
    pub surface_mean: Option<f64>,
}

/// Current conditions reported by the weather provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawWeatherSample {
    pub temperature_celsius: f64,
    pub relative_humidity_percent: f64,
}

/// Normalized surface means for the tracked soil properties. A `None` field
/// means the survey had no usable value there; the form leaves it for the
/// user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub ph: Option<f64>,
}

impl SoilSample {
    /// Extract the tracked properties from raw survey layers, applying unit
    /// normalization. Absent layers and null means both yield `None`.
    pub fn from_layers(layers: &[RawSoilLayer]) -> Self {
        let value = |property: SoilProperty| {
            let name = property.query_name();
            let mean = layers
                .iter()
                .find(|layer| layer.name == name)
                .and_then(|layer| layer.surface_mean);
            units::normalize(name, mean)
        };

        Self {
            nitrogen: value(SoilProperty::Nitrogen),
            phosphorus: value(SoilProperty::Phosphorus),
            potassium: value(SoilProperty::Potassium),
            ph: value(SoilProperty::Ph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str, mean: Option<f64>) -> RawSoilLayer {
        RawSoilLayer {
            name: name.to_string(),
            surface_mean: mean,
        }
    }

    #[test]
    fn test_from_layers_all_present() {
        let layers = [
            layer("nitrogen", Some(3.0)),
            layer("p", Some(50.0)),
            layer("k", Some(80.0)),
            layer("phh2o", Some(65.0)),
        ];
        let sample = SoilSample::from_layers(&layers);
        assert_eq!(sample.nitrogen, Some(30.0));
        assert_eq!(sample.phosphorus, Some(5.0));
        assert_eq!(sample.potassium, Some(8.0));
        assert_eq!(sample.ph, Some(6.5));
    }

    #[test]
    fn test_from_layers_null_mean_yields_none() {
        let layers = [
            layer("nitrogen", Some(3.0)),
            layer("p", Some(50.0)),
            layer("k", Some(80.0)),
            layer("phh2o", None),
        ];
        let sample = SoilSample::from_layers(&layers);
        assert_eq!(sample.ph, None);
        assert_eq!(sample.nitrogen, Some(30.0));
        assert_eq!(sample.phosphorus, Some(5.0));
        assert_eq!(sample.potassium, Some(8.0));
    }

    #[test]
    fn test_from_layers_missing_layer_yields_none() {
        let layers = [layer("nitrogen", Some(2.0))];
        let sample = SoilSample::from_layers(&layers);
        assert_eq!(sample.nitrogen, Some(20.0));
        assert_eq!(sample.phosphorus, None);
        assert_eq!(sample.potassium, None);
        assert_eq!(sample.ph, None);
    }

    #[test]
    fn test_from_layers_ignores_untracked_layers() {
        let layers = [layer("ocd", Some(12.0)), layer("phh2o", Some(70.0))];
        let sample = SoilSample::from_layers(&layers);
        assert_eq!(sample.ph, Some(7.0));
        assert_eq!(sample.nitrogen, None);
    }
}
