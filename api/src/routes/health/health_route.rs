//! GET /api/health: reports vector store reachability and collection size.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use lyrics_store::StoreError;
use tracing::{debug, error};

use crate::{
    core::app_state::AppState, middleware_layer::request_id::request_id,
    routes::health::health_response::HealthResponse,
};

/// Handler: GET /api/health
///
/// Never fails as a handler: any store error becomes a 500 with an
/// `unhealthy` body.
pub async fn health_route(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let request_id = request_id(&headers);
    debug!(request_id = %request_id, "health_route: start");

    match probe(&state).await {
        Ok(body) => {
            debug!(request_id = %request_id, "health_route: healthy");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            error!(
                request_id = %request_id,
                error = %err,
                "health_route: vector store unreachable"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::unhealthy(err.to_string())),
            )
                .into_response()
        }
    }
}

async fn probe(state: &AppState) -> Result<HealthResponse, StoreError> {
    let names = state.index.collection_names().await?;
    let collection_exists = names.iter().any(|n| *n == state.collection);
    let songs = state.index.count(&state.collection).await?;

    Ok(HealthResponse::healthy(
        state.collection.clone(),
        collection_exists,
        songs,
    ))
}
