use crate::config::embedding_provider::EmbeddingProvider;

/// Configuration for an embedding model invocation.
///
/// # Fields
///
/// - `provider`: Which backend to call.
/// - `model`: The model identifier (e.g., `"text-embedding-3-small"`).
/// - `endpoint`: Base URL of the API, without the `/v1/...` suffix.
/// - `api_key`: API key for providers that require authentication.
/// - `timeout_secs`: Optional request timeout in seconds.
///
/// # Examples
///
/// ```
/// use embedding_service::config::embedding_config::EmbeddingConfig;
/// use embedding_service::config::embedding_provider::EmbeddingProvider;
///
/// let cfg = EmbeddingConfig {
///     provider: EmbeddingProvider::OpenAI,
///     model: "text-embedding-3-small".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     timeout_secs: Some(30),
/// };
/// assert_eq!(cfg.model, "text-embedding-3-small");
/// ```
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// The embedding provider/backend.
    pub provider: EmbeddingProvider,

    /// Model identifier string.
    pub model: String,

    /// API base URL.
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
