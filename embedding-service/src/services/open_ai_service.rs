//! OpenAI embeddings client.
//!
//! Minimal client around the OpenAI REST API. The endpoint is derived from
//! `EmbeddingConfig::endpoint`:
//! - POST {endpoint}/v1/embeddings for embeddings retrieval
//!
//! Constructor validation:
//! - `cfg.provider` must be `EmbeddingProvider::OpenAI`
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! No retries: a failed call is reported once to the caller.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{embedding_config::EmbeddingConfig, embedding_provider::EmbeddingProvider},
    error_handler::{
        EmbeddingError, HttpError, Provider, ProviderError, ProviderErrorKind, make_snippet,
    },
};

/// Thin client for the OpenAI embeddings API.
///
/// Constructed from a complete [`EmbeddingConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (with timeout and default headers) which
/// is safe to share across concurrent requests.
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: EmbeddingConfig,
    url_embeddings: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - [`EmbeddingError::Provider`] with `InvalidProvider` if `cfg.provider` is not OpenAI
    /// - [`EmbeddingError::Provider`] with `MissingApiKey` if `cfg.api_key` is `None`
    /// - [`EmbeddingError::Provider`] with `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`EmbeddingError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        if cfg.provider != EmbeddingProvider::OpenAI {
            return Err(
                ProviderError::new(Provider::OpenAI, ProviderErrorKind::InvalidProvider).into(),
            );
        }

        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::new(Provider::OpenAI, ProviderErrorKind::MissingApiKey)
            })?;

        let url_embeddings = embeddings_url(&cfg.endpoint)?;

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                ProviderError::new(
                    Provider::OpenAI,
                    ProviderErrorKind::Decode(format!("invalid API key header: {e}")),
                )
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = timeout.as_secs(),
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_embeddings,
        })
    }

    /// Model used for every embeddings call.
    pub fn model(&self) -> &str {
        &self.cfg.model
    }

    /// Retrieves a single embeddings vector via `/v1/embeddings`.
    ///
    /// # Errors
    /// - [`EmbeddingError::Provider`] with `HttpStatus` for non-2xx responses
    /// - [`EmbeddingError::HttpTransport`] for client/network failures
    /// - [`EmbeddingError::Provider`] with `Decode` if the JSON cannot be parsed
    ///   or carries no vector
    pub async fn embeddings(&self, input: &str) -> Result<Vec<f32>, EmbeddingError> {
        let started = Instant::now();
        let body = EmbeddingsRequest {
            model: &self.cfg.model,
            input,
        };

        debug!(
            model = %self.cfg.model,
            input_len = input.len(),
            "POST {}", self.url_embeddings
        );

        let resp = self
            .client
            .post(&self.url_embeddings)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_embeddings.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "OpenAI /v1/embeddings returned non-success status"
            );

            return Err(ProviderError::new(
                Provider::OpenAI,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url,
                    snippet,
                }),
            )
            .into());
        }

        let out: EmbeddingsResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode /v1/embeddings response"
                );
                return Err(ProviderError::new(
                    Provider::OpenAI,
                    ProviderErrorKind::Decode(format!(
                        "serde error: {e}; expected `data[0].embedding`"
                    )),
                )
                .into());
            }
        };

        let embedding = first_embedding(out)?;

        info!(
            model = %self.cfg.model,
            dim = embedding.len(),
            latency_ms = started.elapsed().as_millis(),
            "embeddings completed"
        );

        Ok(embedding)
    }
}

/// Builds the `/v1/embeddings` URL from an API base.
fn embeddings_url(endpoint: &str) -> Result<String, EmbeddingError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
    {
        return Err(ProviderError::new(
            Provider::OpenAI,
            ProviderErrorKind::InvalidEndpoint(endpoint.to_string()),
        )
        .into());
    }
    Ok(format!("{}/v1/embeddings", endpoint.trim_end_matches('/')))
}

/// Takes the first vector out of a decoded response.
fn first_embedding(out: EmbeddingsResponse) -> Result<Vec<f32>, EmbeddingError> {
    let first = out.data.into_iter().next().ok_or_else(|| {
        ProviderError::new(
            Provider::OpenAI,
            ProviderErrorKind::Decode("empty `data` in embeddings response".into()),
        )
    })?;

    if first.embedding.is_empty() {
        return Err(ProviderError::new(
            Provider::OpenAI,
            ProviderErrorKind::Decode("empty embedding vector".into()),
        )
        .into());
    }

    Ok(first.embedding)
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/embeddings`.
#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

/// Response body for `/v1/embeddings`.
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config::openai_embedding;

    fn cfg() -> EmbeddingConfig {
        openai_embedding(
            "sk-test".into(),
            "https://api.openai.com".into(),
            "text-embedding-3-small".into(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn builds_embeddings_url() {
        assert_eq!(
            embeddings_url("https://api.openai.com/").unwrap(),
            "https://api.openai.com/v1/embeddings"
        );
        assert!(embeddings_url("").is_err());
        assert!(embeddings_url("localhost:1234").is_err());
    }

    #[test]
    fn new_requires_api_key() {
        let mut c = cfg();
        c.api_key = None;
        let err = OpenAiService::new(c).unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::Provider(ProviderError {
                kind: ProviderErrorKind::MissingApiKey,
                ..
            })
        ));
    }

    #[test]
    fn new_accepts_valid_config() {
        let svc = OpenAiService::new(cfg()).unwrap();
        assert_eq!(svc.model(), "text-embedding-3-small");
        assert_eq!(svc.url_embeddings, "https://api.openai.com/v1/embeddings");
    }

    #[test]
    fn request_body_shape() {
        let body = EmbeddingsRequest {
            model: "text-embedding-3-small",
            input: "love story",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"model": "text-embedding-3-small", "input": "love story"})
        );
    }

    #[test]
    fn decodes_first_embedding() {
        let raw = r#"{"object":"list","data":[{"object":"embedding","index":0,"embedding":[0.1,-0.2,0.3]}],"model":"text-embedding-3-small"}"#;
        let parsed: EmbeddingsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_embedding(parsed).unwrap(), vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn empty_data_is_a_decode_error() {
        let parsed: EmbeddingsResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        let err = first_embedding(parsed).unwrap_err();
        assert!(err.to_string().contains("empty `data`"));
    }
}
