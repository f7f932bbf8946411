//! Application builder: wires store, use cases, and router into an Axum app.

use axum::Router;

use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_database::CategoryInMemoryRepository;
use catalog_service::share;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application over a fresh, empty category store.
pub fn build_app(config: AppConfig) -> Router {
    let categories = share(CategoryInMemoryRepository::empty());
    build_router(AppState::new(config, categories))
}

/// Runs the Catalog server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let app = build_app(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
