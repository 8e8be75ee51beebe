use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pgtd_server::config::ServerConfig;
use pgtd_server::router::build_app_router;
use pgtd_server::state::AppState;
use pgtd_validate::Validator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pgtd_server=info,pgtd_validate=info,pgtd_ingest=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("load server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        max_upload_bytes = config.max_upload_bytes,
        "Loaded server configuration"
    );

    let addr = config.socket_addr();
    let validator = Validator::new(config.validation_options());
    let state = AppState::new(config, validator);
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("Starting server on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
