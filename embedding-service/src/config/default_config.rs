//! Default embedding config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`         = API key (mandatory)
//! - `OPENAI_BASE_URL`        = API base URL (default `https://api.openai.com`)
//! - `EMBEDDING_MODEL`        = embedding model (default `text-embedding-3-small`)
//! - `EMBEDDING_TIMEOUT_SECS` = optional request timeout (u32, default 60)

use crate::{
    config::{embedding_config::EmbeddingConfig, embedding_provider::EmbeddingProvider},
    error_handler::{
        ConfigError, EmbeddingError, env_opt_u32, env_or, must_env, validate_http_endpoint,
    },
};

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default embedding model; 1536-dimensional vectors.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the OpenAI embedding config from the environment.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is missing
/// - [`ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` is not http(s)
/// - [`ConfigError::InvalidNumber`] if `EMBEDDING_TIMEOUT_SECS` is not a u32
pub fn config_openai_embedding() -> Result<EmbeddingConfig, EmbeddingError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let endpoint = env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL);
    let model = env_or("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL);
    let timeout_secs = env_opt_u32("EMBEDDING_TIMEOUT_SECS")?.map(u64::from);

    openai_embedding(api_key, endpoint, model, timeout_secs)
}

/// Validates the pieces of an OpenAI embedding config and assembles it.
///
/// # Errors
/// Same as [`config_openai_embedding`], minus missing-variable cases.
pub fn openai_embedding(
    api_key: String,
    endpoint: String,
    model: String,
    timeout_secs: Option<u64>,
) -> Result<EmbeddingConfig, EmbeddingError> {
    let endpoint = endpoint.trim().trim_end_matches('/').to_string();
    validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    Ok(EmbeddingConfig {
        provider: EmbeddingProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        timeout_secs: Some(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    })
}
