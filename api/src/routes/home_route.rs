//! GET /: serves the bundled frontend page.

use std::{io::ErrorKind, sync::Arc};

use axum::{extract::State, response::Html};
use tracing::{debug, error, warn};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// File name of the page inside the static directory.
pub const INDEX_FILE: &str = "index.html";

/// Handler: GET /
///
/// Read from disk on every request; no upstream is touched.
pub async fn home_route(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let path = state.static_dir.join(INDEX_FILE);

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => {
            debug!(path = %path.display(), bytes = html.len(), "home_route: served");
            Ok(Html(html))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "home_route: page missing");
            Err(AppError::NotFound)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "home_route: read failed");
            Err(AppError::Internal(format!("failed to read {INDEX_FILE}: {e}")))
        }
    }
}
