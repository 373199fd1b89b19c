//! Qdrant connection settings.

use crate::errors::StoreError;

/// The single collection searched by this service.
pub const COLLECTION_NAME: &str = "taylor_swift_lyrics";

/// Default port of Qdrant's REST API; this client speaks gRPC (6334).
pub const QDRANT_REST_PORT: u16 = 6333;

/// Connection settings for the lyrics collection.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Qdrant gRPC endpoint, e.g. `http://localhost:6334`.
    pub qdrant_url: String,
    /// Optional API key for Qdrant Cloud.
    pub qdrant_api_key: Option<String>,
    /// Target collection name.
    pub collection: String,
    /// Skip the client/server version compatibility probe on connect.
    pub skip_compatibility_check: bool,
}

impl StoreConfig {
    /// Creates a config for the fixed lyrics collection.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            qdrant_url: url.into(),
            qdrant_api_key: api_key.filter(|k| !k.trim().is_empty()),
            collection: COLLECTION_NAME.to_string(),
            skip_compatibility_check: true,
        }
    }

    /// Reads `QDRANT_URL` (required) and `QDRANT_API_KEY` (optional).
    ///
    /// # Errors
    /// Returns `StoreError::Config` if `QDRANT_URL` is missing or the result
    /// fails [`StoreConfig::validate`].
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var("QDRANT_URL")
            .map_err(|_| StoreError::Config("missing env variable: QDRANT_URL".into()))?;
        let cfg = Self::new(url, std::env::var("QDRANT_API_KEY").ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Explicit port of `qdrant_url`, if any.
    pub fn port(&self) -> Option<u16> {
        let url = self.qdrant_url.trim();
        let rest = url.split_once("://").map_or(url, |(_, r)| r);
        let authority = rest.split(['/', '?']).next().unwrap_or_default();
        let (_, port) = authority.rsplit_once(':')?;
        port.parse().ok()
    }

    /// True when the URL names the REST port instead of the gRPC one.
    pub fn targets_rest_port(&self) -> bool {
        self.port() == Some(QDRANT_REST_PORT)
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), StoreError> {
        let url = self.qdrant_url.trim();
        if url.is_empty() {
            return Err(StoreError::Config("qdrant_url is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(StoreError::Config(format!(
                "qdrant_url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.collection.trim().is_empty() {
            return Err(StoreError::Config("collection is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_is_fixed() {
        let cfg = StoreConfig::new("http://localhost:6334", None);
        assert_eq!(cfg.collection, "taylor_swift_lyrics");
        assert!(cfg.skip_compatibility_check);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn blank_api_key_is_dropped() {
        let cfg = StoreConfig::new("http://localhost:6334", Some("  ".into()));
        assert!(cfg.qdrant_api_key.is_none());

        let cfg = StoreConfig::new("https://x.cloud.qdrant.io:6334", Some("secret".into()));
        assert_eq!(cfg.qdrant_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn rest_port_is_detected() {
        assert!(StoreConfig::new("http://localhost:6333", None).targets_rest_port());
        assert!(StoreConfig::new("http://qdrant:6333/", None).targets_rest_port());

        let grpc = StoreConfig::new("http://localhost:6334", None);
        assert_eq!(grpc.port(), Some(6334));
        assert!(!grpc.targets_rest_port());

        let cloud = StoreConfig::new("https://x.cloud.qdrant.io", None);
        assert_eq!(cloud.port(), None);
        assert!(!cloud.targets_rest_port());
    }

    #[test]
    fn url_is_validated() {
        assert!(StoreConfig::new("", None).validate().is_err());
        assert!(StoreConfig::new("localhost:6334", None).validate().is_err());
    }
}
