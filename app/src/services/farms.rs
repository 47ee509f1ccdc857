//! Farm registration and listing
//!
//! Thin pass-through to the remote backend. Input is validated locally before
//! the wire call; a farm's coordinate is fixed at creation and never edited.

use validator::Validate;

use shared::{Coordinate, Farm, FarmCreated, NewFarm};

use crate::error::{AppError, AppResult};
use crate::external::BackendClient;

/// Farm operations against the remote backend
pub struct FarmService {
    backend: BackendClient,
}

impl FarmService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// List the user's farms
    pub async fn list(&self) -> AppResult<Vec<Farm>> {
        self.backend.get_farms().await
    }

    /// Register a new farm after local validation
    pub async fn add(&self, farm: NewFarm) -> AppResult<FarmCreated> {
        farm.validate().map_err(|e| AppError::Validation {
            field: "farm".to_string(),
            message: e.to_string(),
        })?;

        Coordinate::new(farm.location.latitude, farm.location.longitude).map_err(|msg| {
            AppError::Validation {
                field: "location".to_string(),
                message: msg.to_string(),
            }
        })?;

        self.backend.add_farm(&farm).await
    }
}
