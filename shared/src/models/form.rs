//! Prediction form state
//!
//! Numeric fields are held as free text until submission so the user can type
//! partial values; the empty string means "unset". Auto-fill only ever writes
//! into empty fields; a value the user (or an earlier fill) put there stays.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Farm, PredictionInput, RawWeatherSample, SoilSample};
use crate::units;

/// Mutable state behind the yield prediction form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgronomicForm {
    pub farm_id: Option<Uuid>,
    pub crop: String,
    pub sowing_date: String,
    pub area_ha: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub ph: String,
    pub moisture: String,
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
    pub fertilizer_kg: String,
    pub pesticide_kg: String,
}

/// Editable form fields, used to route user keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Crop,
    SowingDate,
    AreaHa,
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    Moisture,
    Temperature,
    Humidity,
    Rainfall,
    FertilizerKg,
    PesticideKg,
}

/// A required form field was left empty. Blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

impl AgronomicForm {
    /// Read one editable field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Crop => &self.crop,
            FormField::SowingDate => &self.sowing_date,
            FormField::AreaHa => &self.area_ha,
            FormField::Nitrogen => &self.nitrogen,
            FormField::Phosphorus => &self.phosphorus,
            FormField::Potassium => &self.potassium,
            FormField::Ph => &self.ph,
            FormField::Moisture => &self.moisture,
            FormField::Temperature => &self.temperature,
            FormField::Humidity => &self.humidity,
            FormField::Rainfall => &self.rainfall,
            FormField::FertilizerKg => &self.fertilizer_kg,
            FormField::PesticideKg => &self.pesticide_kg,
        }
    }

    /// Mutable access to one editable field
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Crop => &mut self.crop,
            FormField::SowingDate => &mut self.sowing_date,
            FormField::AreaHa => &mut self.area_ha,
            FormField::Nitrogen => &mut self.nitrogen,
            FormField::Phosphorus => &mut self.phosphorus,
            FormField::Potassium => &mut self.potassium,
            FormField::Ph => &mut self.ph,
            FormField::Moisture => &mut self.moisture,
            FormField::Temperature => &mut self.temperature,
            FormField::Humidity => &mut self.humidity,
            FormField::Rainfall => &mut self.rainfall,
            FormField::FertilizerKg => &mut self.fertilizer_kg,
            FormField::PesticideKg => &mut self.pesticide_kg,
        }
    }

    /// Switch the form to a newly selected farm.
    ///
    /// The farm's own fields are authoritative and always overwritten; the
    /// coordinate-dependent fields are cleared so stale values from the
    /// previous farm can never leak into the new one. Moisture and rainfall
    /// are purely user-entered and survive the switch, as do crop and sowing
    /// date.
    pub fn apply_farm_selection(&mut self, farm: &Farm) {
        self.farm_id = Some(farm.farm_id);
        self.area_ha = units::display(farm.area_ha);
        self.nitrogen.clear();
        self.phosphorus.clear();
        self.potassium.clear();
        self.ph.clear();
        self.temperature.clear();
        self.humidity.clear();
    }

    /// Merge a weather lookup result, filling only fields that are still
    /// empty.
    pub fn merge_weather(&mut self, sample: &RawWeatherSample) {
        fill_if_empty(&mut self.temperature, sample.temperature_celsius);
        fill_if_empty(&mut self.humidity, sample.relative_humidity_percent);
    }

    /// Merge a soil lookup result, filling only fields that are still empty.
    /// Properties the survey had no value for are left alone.
    pub fn merge_soil(&mut self, sample: &SoilSample) {
        if let Some(n) = sample.nitrogen {
            fill_if_empty(&mut self.nitrogen, n);
        }
        if let Some(p) = sample.phosphorus {
            fill_if_empty(&mut self.phosphorus, p);
        }
        if let Some(k) = sample.potassium {
            fill_if_empty(&mut self.potassium, k);
        }
        if let Some(ph) = sample.ph {
            fill_if_empty(&mut self.ph, ph);
        }
    }

    /// Validate required fields and coerce the free-text values into the
    /// submission payload.
    ///
    /// Presence is validated; numeric well-formedness is not: an unparseable
    /// value is passed through as NaN for the backend to judge.
    pub fn to_payload(&self) -> Result<PredictionInput, MissingField> {
        let farm_id = self.farm_id.ok_or(MissingField("farm"))?;

        Ok(PredictionInput {
            farm_id,
            crop: require(&self.crop, "crop")?.to_string(),
            sowing_date: require(&self.sowing_date, "sowing_date")?.to_string(),
            area: parse_or_nan(require(&self.area_ha, "area")?),
            nitrogen: parse_or_nan(require(&self.nitrogen, "N")?),
            phosphorus: parse_or_nan(require(&self.phosphorus, "P")?),
            potassium: parse_or_nan(require(&self.potassium, "K")?),
            ph: parse_or_nan(require(&self.ph, "ph")?),
            fertilizer: parse_or_nan(require(&self.fertilizer_kg, "fertilizer")?),
            pesticide: parse_or_nan(require(&self.pesticide_kg, "pesticide")?),
            moisture: optional_or_zero(&self.moisture),
            temperature: optional_or_zero(&self.temperature),
            humidity: optional_or_zero(&self.humidity),
            rainfall: optional_or_zero(&self.rainfall),
        })
    }

    /// Clear everything back to the mount state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Fill-if-empty merge policy: automated writes never clobber an existing
/// value, whatever put it there.
fn fill_if_empty(slot: &mut String, value: f64) {
    if slot.is_empty() {
        *slot = units::display(value);
    }
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, MissingField> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_or_nan(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

fn optional_or_zero(value: &str) -> f64 {
    if value.trim().is_empty() {
        0.0
    } else {
        parse_or_nan(value)
    }
}
