//! Embedding provider client for the lyrics search service.
//!
//! - [`config`]: env-driven [`EmbeddingConfig`](config::embedding_config::EmbeddingConfig)
//! - [`services::open_ai_service::OpenAiService`]: `text -> Vec<f32>` over the OpenAI API
//! - [`error_handler`]: unified [`EmbeddingError`](error_handler::EmbeddingError)
//!
//! Construct the service once, wrap it in `Arc`, and share it.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::default_config::config_openai_embedding;
pub use error_handler::EmbeddingError;
pub use services::open_ai_service::OpenAiService;
