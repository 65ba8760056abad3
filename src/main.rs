// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use std::{sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_loader::DashboardLoader;
use crate::application::dashboard_state::DashboardState;
use crate::application::document_source::DocumentSource;
use crate::infrastructure::config::{load_config, SourceSettings};
use crate::infrastructure::file_source::FileDocumentSource;
use crate::infrastructure::http_source::HttpDocumentSource;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;

    // Create document source (infrastructure layer)
    let source = build_source(&config.source)?;

    // Create state and kick off both loads (application layer)
    let state = DashboardState::new(config.display.default_mode);
    let mut loader = DashboardLoader::start(
        state.clone(),
        source,
        config.source.telemetry_resource.clone(),
        config.source.speedtest_resource.clone(),
    );

    // Build router (presentation layer)
    let app_state = Arc::new(AppState::new(state));
    let streaming = app_state.streaming_service.clone();
    let router = build_router(app_state);

    // Start server
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Starting network-monitor dashboard on {} (documents from {})",
        addr,
        config.source.base_url
    );

    // Open streams and unfinished loads would otherwise hold graceful shutdown open
    let shutdown = async move {
        shutdown_signal().await;
        loader.shutdown();
        streaming.shutdown();
        loader.wait().await;
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Dashboard shut down");

    Ok(())
}

fn build_source(settings: &SourceSettings) -> anyhow::Result<Arc<dyn DocumentSource>> {
    if let Some(files) = FileDocumentSource::from_url(&settings.base_url) {
        return Ok(Arc::new(files));
    }

    let timeout = settings.timeout_secs.map(Duration::from_secs);
    Ok(Arc::new(HttpDocumentSource::new(settings.base_url.clone(), timeout)?))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
