//! Validation utilities for the AgroYield platform

// ============================================================================
// Geographic Validations
// ============================================================================

/// Validate latitude is within the WGS84 range
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude is within the WGS84 range
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Farm Validations
// ============================================================================

/// Validate cultivated area in hectares
pub fn validate_area_ha(area_ha: f64) -> Result<(), &'static str> {
    if !area_ha.is_finite() || area_ha <= 0.0 {
        return Err("Area must be a positive number of hectares");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

// ============================================================================
// Crop Catalog
// ============================================================================

/// Crop types accepted by the yield prediction model
pub const CROP_TYPES: &[&str] = &[
    "Arecanut", "Arhar/Tur", "Bajra", "Banana", "Barley", "Black pepper",
    "Blackgram", "Cardamom", "Cashewnut", "Castor seed", "Coconut ",
    "Coriander", "Cotton(lint)", "Cowpea(Lobia)", "Dry chillies",
    "Dry ginger", "Garlic", "Ginger", "Gram", "Groundnut", "Guar seed",
    "Horse-gram", "Jowar", "Jute", "Khesari", "Linseed", "Maize",
    "Masoor", "Mesta", "Moong(Green Gram)", "Moth", "Niger seed",
    "Oilseeds total", "Onion", "Other  Rabi pulses", "Other Cereals",
    "Other Kharif pulses", "Other Summer Pulses", "Peas & beans (Pulses)",
    "Potato", "Ragi", "Rapeseed &Mustard", "Rice", "Safflower",
    "Sannhamp", "Sesamum", "Small millets", "Soyabean", "Sugarcane",
    "Sunflower", "Sweet potato", "Tapioca", "Tobacco", "Turmeric", "Urad",
    "Varagu", "Wheat", "other oilseeds",
];

/// Validate crop name is in the catalog the model was trained on
pub fn validate_crop_type(crop: &str) -> Result<(), &'static str> {
    if CROP_TYPES.contains(&crop) {
        Ok(())
    } else {
        Err("Crop is not a recognized crop type")
    }
}
