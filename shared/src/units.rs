//! Unit normalization for soil survey properties
//!
//! The soil upstream reports each property in its own storage unit. These
//! conversions map a raw surface-depth mean onto the units the yield model
//! expects and must match the model's training data exactly.

/// Convert a raw property mean to its canonical agronomic unit.
///
/// Returns `None` when the survey has no data at that location and depth.
/// Unrecognized property names pass through unchanged. The result is rounded
/// to two decimal places, the precision the form displays.
pub fn normalize(property_name: &str, raw_mean: Option<f64>) -> Option<f64> {
    let mean = raw_mean?;
    let scaled = match property_name {
        // pH is stored in tenths of a pH unit
        "phh2o" => mean / 10.0,
        // nitrogen is stored in cg/kg
        "nitrogen" => mean * 10.0,
        "p" => mean * 0.1,
        "k" => mean * 0.1,
        _ => mean,
    };
    Some(round2(scaled))
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a normalized value as the two-decimal string the form stores.
pub fn display(value: f64) -> String {
    format!("{:.2}", value)
}
