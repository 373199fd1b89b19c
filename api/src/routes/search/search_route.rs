//! POST /api/search: semantic search over the lyrics collection.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use lyrics_store::search_lyrics;
use tracing::{debug, error, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::request_id::request_id,
    routes::search::{
        search_request::SearchRequest,
        search_response::{SearchResponse, SearchResultItem},
    },
};

pub const QUERY_REQUIRED: &str = "The 'query' field is required";

/// Handler: POST /api/search
///
/// Input is validated before any upstream call. Upstream failures map to a
/// 500 with the cause in `message`; there are no partial results.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/api/search \
///   -H 'content-type: application/json' \
///   -d '{"query":"love story","limit":2}'
/// ```
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<SearchResponse>> {
    let request_id = request_id(&headers);

    let Json(req) = body.map_err(|rejection| {
        warn!(
            request_id = %request_id,
            error = %rejection.body_text(),
            "search_route: rejected body"
        );
        AppError::from(rejection)
    })?;

    let Some(query) = req.query() else {
        warn!(request_id = %request_id, "search_route: missing query");
        return Err(AppError::BadRequest(QUERY_REQUIRED.into()));
    };
    let limit = req.limit();

    debug!(
        request_id = %request_id,
        query = %query,
        limit,
        "search_route: start"
    );

    let hits = search_lyrics(
        state.embedder.as_ref(),
        state.index.as_ref(),
        &state.collection,
        query,
        limit,
    )
    .await
    .map_err(|err| {
        error!(
            request_id = %request_id,
            error = %err,
            "search_route: search failed"
        );
        AppError::from(err)
    })?;

    let results: Vec<SearchResultItem> = hits.iter().map(SearchResultItem::from).collect();

    debug!(
        request_id = %request_id,
        hits = results.len(),
        "search_route: success"
    );

    Ok(Json(SearchResponse::new(query.to_string(), results)))
}
