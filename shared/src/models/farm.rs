//! Farm models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::Coordinate;

/// A farm registered by a user. Farms are never mutated after creation;
/// corrections go through delete-and-recreate on the remote backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farm {
    pub farm_id: Uuid,
    pub name: String,
    pub location: Coordinate,
    pub soil_type: SoilType,
    pub area_ha: f64,
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new farm
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewFarm {
    #[validate(length(min = 1, message = "Farm name is required"))]
    pub name: String,
    pub location: Coordinate,
    pub soil_type: SoilType,
    #[validate(range(min = 0.01, message = "Area must be a positive number of hectares"))]
    pub area_ha: f64,
}

/// Acknowledgement returned by the remote backend on farm creation
#[derive(Debug, Clone, Deserialize)]
pub struct FarmCreated {
    pub farm_id: Uuid,
    pub message: String,
}

/// Broad soil texture classes offered when registering a farm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Sandy,
    Loamy,
    Clayey,
    /// Free-text soil description
    Custom(String),
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Alluvial => write!(f, "alluvial"),
            SoilType::Black => write!(f, "black"),
            SoilType::Red => write!(f, "red"),
            SoilType::Laterite => write!(f, "laterite"),
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Loamy => write!(f, "loamy"),
            SoilType::Clayey => write!(f, "clayey"),
            SoilType::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl From<SoilType> for String {
    fn from(soil: SoilType) -> Self {
        soil.to_string()
    }
}

impl From<String> for SoilType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "alluvial" => SoilType::Alluvial,
            "black" => SoilType::Black,
            "red" => SoilType::Red,
            "laterite" => SoilType::Laterite,
            "sandy" => SoilType::Sandy,
            "loamy" => SoilType::Loamy,
            "clayey" => SoilType::Clayey,
            _ => SoilType::Custom(value),
        }
    }
}
