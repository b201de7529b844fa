//! WPGate API server

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wpgate_api::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(
        bind_address = %config.bind_address,
        version_base = %config.version_base_path.display(),
        gate_base = %config.gate_base_path.display(),
        cache_expiry_secs = config.version_cache_expiry.as_secs(),
        "starting wpgate-api"
    );

    let state = AppState::new(config);
    let bind_address = state.config.bind_address.clone();
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutting down");
}
