//! User profile model
//!
//! Identity and session mechanics live with the external identity provider;
//! only the editable profile record crosses this system.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile record pushed to the remote backend on settings save
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}
