//! HTTP surface of the lyrics search service.
//!
//! | Method | Path          | Handler |
//! |--------|---------------|---------|
//! | `GET`  | `/`           | bundled frontend page |
//! | `GET`  | `/api/health` | collection presence and song count |
//! | `POST` | `/api/search` | semantic search, `{query, limit?}` |

pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

use crate::{
    core::app_state::{AppState, ServerConfig},
    error_handler::AppError,
    middleware_layer::request_id::request_id_layer,
    routes::{
        health::health_route::health_route, home_route::home_route,
        search::search_route::search_route,
    },
};

pub use middleware_layer::request_id::REQUEST_ID_HEADER;

/// Builds the router over an already constructed state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_route))
        .route("/api/health", get(health_route))
        .route("/api/search", post(search_route))
        .layer(middleware::from_fn(request_id_layer))
        .with_state(state)
}

/// Reads configuration from the environment, builds both clients once and
/// serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let server = ServerConfig::from_env();
    let state = Arc::new(AppState::from_env(&server)?);

    info!(
        address = %server.api_address,
        collection = %state.collection,
        static_dir = %server.static_dir.display(),
        "starting lyrics search api"
    );

    let listener = tokio::net::TcpListener::bind(&server.api_address)
        .await
        .map_err(AppError::Bind)?;

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
