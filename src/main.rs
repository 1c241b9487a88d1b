//! campus-events server entry point.
//!
//! Loads configuration, seeds the catalog and serves the REST API until
//! Ctrl-C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use campus_events::api;
use campus_events::app_state::AppState;
use campus_events::config::{LogFormat, ServerConfig};
use campus_events::domain::CatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env().context("failed to load configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting campus-events");

    // Build domain layer
    let catalog = Arc::new(CatalogStore::with_seed_data());
    tracing::info!(
        events = catalog.event_count().await,
        clubs = catalog.club_count(),
        "catalog seeded"
    );

    // Build router
    let app = api::build_app(AppState::new(catalog));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
