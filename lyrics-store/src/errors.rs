//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for lyrics-store operations.
///
/// Upstream failures are carried as text: callers report them as-is and
/// never branch on the cause.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Invalid or missing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Qdrant client errors (transport, auth, server-side).
    #[error("qdrant error: {0}")]
    Qdrant(String),

    /// Embedding provider failed to turn the query into a vector.
    #[error("embedding error: {0}")]
    Embedding(String),
}

impl From<embedding_service::EmbeddingError> for StoreError {
    fn from(err: embedding_service::EmbeddingError) -> Self {
        StoreError::Embedding(err.to_string())
    }
}
