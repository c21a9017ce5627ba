//! Record Service
//!
//! Serves the record resource over HTTP.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use record_service::{api, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("record_service={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Record Service v{}", env!("CARGO_PKG_VERSION"));

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );
    let base_path = config.base_path();
    let docs_enabled = config.docs.enabled;

    let state = AppState::in_memory(config);
    let app = api::create_router(state);

    tracing::info!("Record resource mounted at {}", base_path);
    if docs_enabled {
        tracing::info!("API documentation at /swagger-ui");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on port {}..", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
