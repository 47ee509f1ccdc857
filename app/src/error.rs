//! Error handling for the AgroYield application
//!
//! Nothing here is fatal: adapter failures degrade to manual entry, upstream
//! failures surface as advisories, and every path leaves the form usable.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use shared::MissingField;

/// Which external geodata provider a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Weather,
    Soil,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Weather => write!(f, "weather"),
            DataSource::Soil => write!(f, "soil"),
        }
    }
}

impl std::error::Error for DataSource {}

/// Why a geodata lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterCause {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("no layer data")]
    NoLayerData,
}

/// Failure from one geodata lookup.
///
/// Recoverable: the coordinator converts it into an advisory and the affected
/// fields stay open for manual entry. It never propagates past the
/// coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source} lookup failed: {cause}")]
pub struct AdapterError {
    pub source: DataSource,
    pub cause: AdapterCause,
}

impl AdapterError {
    pub fn weather(cause: AdapterCause) -> Self {
        Self {
            source: DataSource::Weather,
            cause,
        }
    }

    pub fn soil(cause: AdapterCause) -> Self {
        Self {
            source: DataSource::Soil,
            cause,
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A required form field or request parameter is missing or invalid.
    /// Blocks the operation; nothing is sent upstream.
    #[error("validation error: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// A remote call failed. The message is the upstream's own, passed
    /// through verbatim; state the user entered is preserved for retry.
    #[error("{0}")]
    Upstream(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<MissingField> for AppError {
    fn from(missing: MissingField) -> Self {
        AppError::Validation {
            field: missing.0.to_string(),
            message: missing.to_string(),
        }
    }
}

/// Error body returned by the HTTP surface
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message.clone(),
                    details: None,
                    field: Some(field.clone()),
                },
            ),
            AppError::Adapter(err) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    error: format!("{} data unavailable", err.source),
                    details: Some(err.cause.to_string()),
                    field: None,
                },
            ),
            AppError::Upstream(details) => (
                StatusCode::BAD_GATEWAY,
                ErrorBody {
                    error: "Failed to fetch from external API.".to_string(),
                    details: Some(details.clone()),
                    field: None,
                },
            ),
            AppError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: message.clone(),
                    details: None,
                    field: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "An internal server error occurred".to_string(),
                    details: None,
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_error_display() {
        let err = AdapterError::soil(AdapterCause::NoLayerData);
        assert_eq!(err.to_string(), "soil lookup failed: no layer data");

        let err = AdapterError::weather(AdapterCause::Status(503));
        assert_eq!(err.to_string(), "weather lookup failed: unexpected status 503");
    }

    #[test]
    fn test_upstream_message_passthrough() {
        let err = AppError::Upstream("Prediction model not loaded".to_string());
        assert_eq!(err.to_string(), "Prediction model not loaded");
    }

    #[test]
    fn test_missing_field_becomes_validation() {
        let err: AppError = MissingField("crop").into();
        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "crop");
                assert_eq!(message, "crop is required");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
