//! Shared form session
//!
//! Owns the prediction form and the selection epoch. All mutation funnels
//! through this handle, so the merge policy and stale-result discard live in
//! one place. Lookups are never cancelled: a result from a superseded
//! selection is simply discarded when it finally arrives.

use std::sync::{Arc, Mutex, MutexGuard};

use shared::{AgronomicForm, Farm, FormField, RawWeatherSample, SoilSample};

/// Monotonic token identifying one farm selection
pub type SelectionEpoch = u64;

/// Cheaply clonable handle to the mutable form state
#[derive(Clone, Default)]
pub struct FormSession {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    form: AgronomicForm,
    epoch: SelectionEpoch,
}

impl FormSession {
    /// Fresh form, as created when the prediction form mounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user keystroke. User input always sticks: no later automated
    /// fill may overwrite it.
    pub fn edit(&self, field: FormField, value: impl Into<String>) {
        *self.lock().form.field_mut(field) = value.into();
    }

    /// Begin a new farm selection.
    ///
    /// Bumps the epoch, invalidating any lookup still in flight for the
    /// previous farm, overwrites the farm's own fields and clears the
    /// coordinate-dependent ones. Returns the epoch the new lookups must
    /// present when their results arrive.
    pub fn begin_selection(&self, farm: &Farm) -> SelectionEpoch {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.form.apply_farm_selection(farm);
        inner.epoch
    }

    /// Merge a weather result if the selection it was issued for is still
    /// current. Returns `false` when the result was discarded as stale.
    pub fn apply_weather(&self, epoch: SelectionEpoch, sample: &RawWeatherSample) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            return false;
        }
        inner.form.merge_weather(sample);
        true
    }

    /// Merge a soil result under the same staleness rule as weather.
    pub fn apply_soil(&self, epoch: SelectionEpoch, sample: &SoilSample) -> bool {
        let mut inner = self.lock();
        if inner.epoch != epoch {
            return false;
        }
        inner.form.merge_soil(sample);
        true
    }

    /// Whether the given selection is still the active one
    pub fn is_current(&self, epoch: SelectionEpoch) -> bool {
        self.lock().epoch == epoch
    }

    /// Copy of the current form state
    pub fn snapshot(&self) -> AgronomicForm {
        self.lock().form.clone()
    }

    /// Clear the form back to its mount state (successful submission or
    /// navigation away). The epoch keeps counting so in-flight lookups from
    /// before the reset stay invalidated.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        inner.form.reset();
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("form lock poisoned")
    }
}
