//! Auto-fill coordinator
//!
//! On farm selection, fires the weather and soil lookups concurrently and
//! merges whichever resolves first into the form: no barrier, partial fills
//! appear progressively. A lookup failure degrades that source to manual
//! entry and never blocks the other. The one ordering hazard, a result
//! arriving for a farm the user has already switched away from, is handled by
//! the form session's selection epoch.

use std::sync::Arc;

use tokio::task::JoinHandle;

use shared::Farm;

use crate::external::{SoilSource, WeatherSource};
use crate::services::form::FormSession;
use crate::services::notification::AdvisoryChannel;

/// Coordinates the concurrent geodata lookups triggered by farm selection
pub struct AutoFillCoordinator {
    weather: Arc<dyn WeatherSource>,
    soil: Arc<dyn SoilSource>,
    form: FormSession,
    advisories: AdvisoryChannel,
}

/// Handles for the two in-flight lookups.
///
/// Dropping them detaches the tasks; the UI never waits on them. Tests await
/// them to observe completion deterministically.
pub struct AutoFillHandle {
    pub weather: JoinHandle<()>,
    pub soil: JoinHandle<()>,
}

impl AutoFillCoordinator {
    pub fn new(
        weather: Arc<dyn WeatherSource>,
        soil: Arc<dyn SoilSource>,
        form: FormSession,
        advisories: AdvisoryChannel,
    ) -> Self {
        Self {
            weather,
            soil,
            form,
            advisories,
        }
    }

    /// React to the user picking a farm.
    ///
    /// Resets the coordinate-dependent fields, then fans out both lookups.
    /// Each result is merged fill-if-empty as soon as it resolves; results
    /// and failure advisories for a superseded selection are discarded on
    /// arrival.
    pub fn on_farm_selected(&self, farm: &Farm) -> AutoFillHandle {
        let epoch = self.form.begin_selection(farm);
        let coordinate = farm.location;

        tracing::debug!(
            farm_id = %farm.farm_id,
            epoch,
            "farm selected, launching geodata lookups"
        );

        let weather = {
            let source = Arc::clone(&self.weather);
            let form = self.form.clone();
            let advisories = self.advisories.clone();
            tokio::spawn(async move {
                match source.current(coordinate).await {
                    Ok(sample) => {
                        if !form.apply_weather(epoch, &sample) {
                            tracing::debug!(epoch, "discarding stale weather result");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(epoch, "weather auto-fill failed: {}", err);
                        if form.is_current(epoch) {
                            advisories.warn(
                                "Could not auto-fill weather data",
                                "Enter temperature and humidity manually.",
                            );
                        }
                    }
                }
            })
        };

        let soil = {
            let source = Arc::clone(&self.soil);
            let form = self.form.clone();
            let advisories = self.advisories.clone();
            tokio::spawn(async move {
                match source.surface_sample(coordinate).await {
                    Ok(sample) => {
                        if !form.apply_soil(epoch, &sample) {
                            tracing::debug!(epoch, "discarding stale soil result");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(epoch, "soil auto-fill failed: {}", err);
                        if form.is_current(epoch) {
                            advisories.warn(
                                "Could not auto-fill soil data",
                                "Enter N, P, K and pH manually.",
                            );
                        }
                    }
                }
            })
        };

        AutoFillHandle { weather, soil }
    }
}
