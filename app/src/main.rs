//! AgroYield - Geodata Proxy Server
//!
//! Local intermediary between the prediction form and the external geodata
//! providers: keeps API keys server-side and forwards lookups unchanged.

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agroyield_app::{config::Config, create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agroyield_app=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgroYield geodata proxy");
    tracing::info!("Environment: {}", config.environment);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.geodata.request_timeout_secs))
        .build()?;

    let port = config.server.port;
    let state = AppState {
        config: Arc::new(config),
        http,
    };

    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
