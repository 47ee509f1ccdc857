//! Yield prediction submission
//!
//! The prediction model is remote and opaque; this service validates and
//! coerces the form, ships the payload, and keeps the form intact when the
//! backend says no.

use shared::{PredictionRecord, PredictionResult};

use crate::error::AppResult;
use crate::external::BackendClient;
use crate::services::form::FormSession;
use crate::services::notification::AdvisoryChannel;

/// Submits prediction requests and fetches history
pub struct PredictionService {
    backend: BackendClient,
    advisories: AdvisoryChannel,
}

impl PredictionService {
    pub fn new(backend: BackendClient, advisories: AdvisoryChannel) -> Self {
        Self {
            backend,
            advisories,
        }
    }

    /// Validate, coerce and submit the form.
    ///
    /// A missing required field blocks submission before anything goes on the
    /// wire. On success the form session is reset; on upstream failure the
    /// backend's message is surfaced verbatim and every entered value is
    /// preserved for retry.
    pub async fn submit(&self, session: &FormSession) -> AppResult<PredictionResult> {
        let payload = session.snapshot().to_payload()?;

        tracing::info!(farm_id = %payload.farm_id, crop = %payload.crop, "submitting yield prediction");

        match self.backend.predict_yield(&payload).await {
            Ok(result) => {
                self.advisories.info(
                    "Prediction completed",
                    "Yield prediction generated successfully.",
                );
                session.reset();
                Ok(result)
            }
            Err(err) => {
                self.advisories.error("Prediction failed", &err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch the user's prediction history
    pub async fn history(&self) -> AppResult<Vec<PredictionRecord>> {
        self.backend.get_predictions().await
    }
}
