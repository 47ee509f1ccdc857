//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinate of a farm. Immutable once attached to a farm record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the WGS84 ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, &'static str> {
        crate::validation::validate_latitude(latitude)?;
        crate::validation::validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}
