mod analysis;
mod config;
mod errors;
mod models;
mod oracle;
mod prompts;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::oracle::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Insight API v{}", env!("CARGO_PKG_VERSION"));

    let client = OpenAiClient::new(&config.openai_base_url, config.openai_organization.clone())?;
    info!(
        "Oracle client initialized (model: {}, endpoint: {})",
        oracle::MODEL,
        client.endpoint()
    );

    // Checked again on every request; this is only an early hint.
    if config.api_key().is_none() {
        warn!(
            "{} is not set; analysis endpoints will answer missing_api_key until it is",
            config.api_key_var
        );
    }

    let state = AppState {
        oracle: Arc::new(client),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
