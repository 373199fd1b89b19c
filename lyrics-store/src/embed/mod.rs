use crate::errors::StoreError;
use std::{future::Future, pin::Pin};

/// Boxed future returned by the async seams of this crate.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Provider interface for query embedding.
///
/// Async because real providers (OpenAI, etc.) perform HTTP requests.
/// Implementations must be shareable across concurrent requests.
pub trait EmbeddingsProvider: Send + Sync {
    /// Turns `text` into a fixed-length vector.
    fn embed<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Vec<f32>, StoreError>>;
}

pub mod openai;
