//! Yield prediction payloads
//!
//! The prediction model itself is remote and opaque: a request goes out, a
//! prediction comes back. Field names on the wire follow the backend's API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Submission payload for a yield prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub farm_id: Uuid,
    pub crop: String,
    pub sowing_date: String,
    pub area: f64,
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub ph: f64,
    pub moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub fertilizer: f64,
    pub pesticide: f64,
}

/// Prediction returned by the remote backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub farm_id: Option<String>,
    pub predicted_yield_kg_per_ha: f64,
    pub confidence_interval: ConfidenceInterval,
    #[serde(default)]
    pub model_version: Option<String>,
    /// Per-feature contribution weights, passed through for display
    #[serde(default)]
    pub feature_importance: Option<serde_json::Value>,
    #[serde(default)]
    pub fertilizer_recommendation: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// One entry from the user's prediction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub farm_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub outputs: Option<PredictionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_input_wire_names() {
        let input = PredictionInput {
            farm_id: Uuid::nil(),
            crop: "Rice".to_string(),
            sowing_date: "2024-06-15".to_string(),
            area: 2.0,
            nitrogen: 40.0,
            phosphorus: 18.0,
            potassium: 22.0,
            ph: 6.8,
            moisture: 0.0,
            temperature: 29.5,
            humidity: 71.0,
            rainfall: 0.0,
            fertilizer: 120.0,
            pesticide: 10.0,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["N"], 40.0);
        assert_eq!(json["P"], 18.0);
        assert_eq!(json["K"], 22.0);
        assert_eq!(json["ph"], 6.8);
        assert_eq!(json["area"], 2.0);
        assert_eq!(json["fertilizer"], 120.0);
    }

    #[test]
    fn test_prediction_result_tolerates_minimal_body() {
        let result: PredictionResult = serde_json::from_value(serde_json::json!({
            "predicted_yield_kg_per_ha": 3120.55,
            "confidence_interval": {"lower": 2800.1, "upper": 3400.9}
        }))
        .unwrap();
        assert_eq!(result.predicted_yield_kg_per_ha, 3120.55);
        assert_eq!(result.confidence_interval.lower, 2800.1);
        assert!(result.model_version.is_none());
        assert!(result.feature_importance.is_none());
    }
}
