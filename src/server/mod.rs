//! HTTP API for the translation catalog.
//!
//! Read routes are public. Write routes require the admin API key in the
//! `x-api-key` header.

mod auth;
mod error;
mod handlers;

pub use auth::API_KEY_HEADER;
pub use error::ApiError;
pub use handlers::{ClassSummary, FieldSummary, HealthResponse};

use crate::context::AppContext;
use anyhow::{Context, Result};
use axum::routing::{get, put};
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the API router over `context`.
pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        // Class introspection
        .route("/classes", get(handlers::list_classes))
        .route("/classes/:name", get(handlers::get_class))
        // Translations
        .route("/translations", put(handlers::put_translation))
        .route("/translations/:lang", get(handlers::find_translations))
        .route(
            "/translations/:lang/:namespace/:key",
            get(handlers::get_translation).delete(handlers::delete_translation),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

/// Serve the API on `port` until Ctrl-C.
pub async fn serve(context: AppContext, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);

    axum::serve(listener, router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
