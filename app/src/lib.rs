//! AgroYield application core
//!
//! Farm management and crop-yield prediction: farms are registered against a
//! remote backend, and the prediction form auto-fills its agronomic inputs
//! from external weather and soil lookups. This crate carries the application
//! services plus the local geodata proxy server.

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{BackendClient, Session, SoilClient, WeatherClient, SoilSource, WeatherSource};
use services::{
    Advisory, AdvisoryChannel, AutoFillCoordinator, FarmService, FormSession, PredictionService,
};

/// Application state shared across proxy handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

/// Client-side application core: every service and adapter, wired once at
/// start-up and passed down explicitly. Logout is `core.session.clear()`;
/// teardown is dropping the core.
pub struct AppCore {
    pub session: Session,
    pub form: FormSession,
    pub autofill: AutoFillCoordinator,
    pub farms: FarmService,
    pub predictions: PredictionService,
    /// Stream of toasts for the UI to drain
    pub advisories: mpsc::UnboundedReceiver<Advisory>,
}

impl AppCore {
    /// Wire the application core from configuration. The session starts
    /// unauthenticated; the identity provider fills it in at login.
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.geodata.request_timeout_secs);

        let session = Session::new();
        let backend = BackendClient::new(config.backend.base_url.clone(), session.clone());

        let weather = Arc::new(WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
            timeout,
        )) as Arc<dyn WeatherSource>;
        let soil = Arc::new(SoilClient::with_base_url(
            config.soil.api_endpoint.clone(),
            timeout,
        )) as Arc<dyn SoilSource>;

        let form = FormSession::new();
        let (channel, advisories) = AdvisoryChannel::new();
        let autofill = AutoFillCoordinator::new(weather, soil, form.clone(), channel.clone());
        let farms = FarmService::new(backend.clone());
        let predictions = PredictionService::new(backend, channel);

        Self {
            session,
            form,
            autofill,
            farms,
            predictions,
            advisories,
        }
    }
}

/// Create the proxy application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgroYield Geodata Proxy v1.0"
}
