//! Remote backend client
//!
//! Typed client for the farm CRUD and yield prediction API. Every request
//! carries the session's bearer token; error bodies are surfaced verbatim so
//! the user sees the backend's own message.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use shared::{Farm, FarmCreated, NewFarm, PredictionInput, PredictionRecord, PredictionResult, UserProfile};

use crate::error::{AppError, AppResult};

/// Bearer credentials for the remote backend.
///
/// Constructed at login, cleared at logout, and injected into every client
/// that talks to the backend. Token issuance and refresh belong to the
/// external identity provider.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }
}

/// Client for the remote farm/prediction backend
#[derive(Clone)]
pub struct BackendClient {
    http_client: Client,
    base_url: String,
    session: Session,
}

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FarmsResponse {
    farms: Vec<Farm>,
}

#[derive(Debug, Deserialize)]
struct PredictionsResponse {
    predictions: Vec<PredictionRecord>,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(base_url: String, session: Session) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url,
            session,
        }
    }

    /// Register a new farm
    pub async fn add_farm(&self, farm: &NewFarm) -> AppResult<FarmCreated> {
        let request = self
            .http_client
            .post(format!("{}/api/add-farm", self.base_url))
            .json(farm);
        self.execute(request).await
    }

    /// List the user's farms
    pub async fn get_farms(&self) -> AppResult<Vec<Farm>> {
        let request = self.http_client.get(format!("{}/api/get-farms", self.base_url));
        let body: FarmsResponse = self.execute(request).await?;
        Ok(body.farms)
    }

    /// Request a yield prediction. Opaque: payload in, prediction out.
    pub async fn predict_yield(&self, input: &PredictionInput) -> AppResult<PredictionResult> {
        let request = self
            .http_client
            .post(format!("{}/api/predict", self.base_url))
            .json(input);
        self.execute(request).await
    }

    /// Fetch the user's prediction history
    pub async fn get_predictions(&self) -> AppResult<Vec<PredictionRecord>> {
        let request = self
            .http_client
            .get(format!("{}/api/get-predictions", self.base_url));
        let body: PredictionsResponse = self.execute(request).await?;
        Ok(body.predictions)
    }

    /// Push updated profile details
    pub async fn update_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let request = self
            .http_client
            .post(format!("{}/api/update-profile", self.base_url))
            .json(profile);
        let _: serde_json::Value = self.execute(request).await?;
        Ok(())
    }

    /// Attach the bearer token, send, and decode; non-2xx responses become
    /// `Upstream` errors carrying the backend's `detail` message when present.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> AppResult<T> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<BackendErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(AppError::Upstream(detail));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse response: {}", e)))
    }
}
