//! Read-only semantic search over the Qdrant lyrics collection.
//!
//! This crate provides:
//! - [`EmbeddingsProvider`]: query text → vector (OpenAI-backed by default)
//! - [`LyricsIndex`]: collection listing, point count, nearest-neighbour query
//! - [`search_lyrics`]: the two combined
//!
//! Nothing here writes to Qdrant.

mod config;
mod embed;
mod errors;
mod index;
mod qdrant_facade;
mod record;
mod retrieve;

pub use config::{COLLECTION_NAME, StoreConfig};
pub use embed::openai::OpenAiEmbedder;
pub use embed::{BoxFuture, EmbeddingsProvider};
pub use errors::StoreError;
pub use index::LyricsIndex;
pub use qdrant_facade::QdrantFacade;
pub use record::LyricHit;
pub use retrieve::search_lyrics;
