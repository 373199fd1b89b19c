//! OpenAI embedding provider implementation.

use std::sync::Arc;

use embedding_service::OpenAiService;
use tracing::trace;

use crate::embed::{BoxFuture, EmbeddingsProvider};
use crate::errors::StoreError;

/// Embeds queries through a shared [`OpenAiService`].
#[derive(Clone, Debug)]
pub struct OpenAiEmbedder {
    svc: Arc<OpenAiService>,
}

impl OpenAiEmbedder {
    pub fn new(svc: Arc<OpenAiService>) -> Self {
        Self { svc }
    }
}

impl EmbeddingsProvider for OpenAiEmbedder {
    fn embed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<f32>, StoreError>> {
        Box::pin(async move {
            trace!(model = self.svc.model(), "OpenAiEmbedder::embed");
            let vector = self.svc.embeddings(text).await?;
            Ok(vector)
        })
    }
}
