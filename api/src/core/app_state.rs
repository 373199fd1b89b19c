use std::{path::PathBuf, sync::Arc};

use embedding_service::{OpenAiService, config_openai_embedding};
use lyrics_store::{
    COLLECTION_NAME, EmbeddingsProvider, LyricsIndex, OpenAiEmbedder, QdrantFacade, StoreConfig,
};

use crate::error_handler::AppError;

/// Default listen address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:5000";

/// Default directory holding `index.html` when `STATIC_DIR` is unset.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Process-level server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, e.g. "0.0.0.0:5000".
    pub api_address: String,
    /// Directory the frontend page is served from.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load from `API_ADDRESS` and `STATIC_DIR`, both optional.
    pub fn from_env() -> Self {
        Self {
            api_address: env_or("API_ADDRESS", DEFAULT_API_ADDRESS),
            static_dir: PathBuf::from(env_or("STATIC_DIR", DEFAULT_STATIC_DIR)),
        }
    }
}

/// Shared state for all HTTP handlers.
///
/// Both client handles are built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Turns query text into a vector.
    pub embedder: Arc<dyn EmbeddingsProvider>,
    /// Vector store holding the lyrics.
    pub index: Arc<dyn LyricsIndex>,
    /// Collection every request runs against.
    pub collection: String,
    /// Directory the frontend page is served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// State over the fixed lyrics collection.
    pub fn new(
        embedder: Arc<dyn EmbeddingsProvider>,
        index: Arc<dyn LyricsIndex>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            embedder,
            index,
            collection: COLLECTION_NAME.to_string(),
            static_dir: static_dir.into(),
        }
    }

    /// Build the OpenAI embedder and the Qdrant client from environment variables.
    ///
    /// # Errors
    /// Returns `AppError::Config` or `AppError::Store` when a required
    /// variable is missing or invalid.
    pub fn from_env(server: &ServerConfig) -> Result<Self, AppError> {
        let openai = OpenAiService::new(config_openai_embedding()?)?;
        let embedder = OpenAiEmbedder::new(Arc::new(openai));

        let store_cfg = StoreConfig::from_env()?;
        let index = QdrantFacade::new(&store_cfg)?;

        Ok(Self::new(
            Arc::new(embedder),
            Arc::new(index),
            server.static_dir.clone(),
        ))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.into())
}
