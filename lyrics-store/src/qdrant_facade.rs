//! Thin adapter around `qdrant-client` to isolate API usage.
//!
//! This facade concentrates all Qdrant interactions behind [`LyricsIndex`],
//! hiding the builder pattern and keeping the rest of the application
//! decoupled from `qdrant-client`. It only reads: no collection is created,
//! and no point is written.

use qdrant_client::Qdrant;
use qdrant_client::qdrant::{CountPointsBuilder, Query, QueryPointsBuilder};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::embed::BoxFuture;
use crate::errors::StoreError;
use crate::index::LyricsIndex;
use crate::record::LyricHit;

/// A facade over the Qdrant client.
///
/// The underlying client multiplexes gRPC calls over one channel and is safe
/// to share across concurrent requests.
pub struct QdrantFacade {
    client: Qdrant,
}

impl QdrantFacade {
    /// Creates a new facade from the given configuration.
    ///
    /// Supports optional API key authentication. No request is made here;
    /// connectivity problems surface on the first call.
    pub fn new(cfg: &StoreConfig) -> Result<Self, StoreError> {
        cfg.validate()?;
        if cfg.targets_rest_port() {
            warn!(
                url = %cfg.qdrant_url,
                "QDRANT_URL points at the REST port 6333; this client uses gRPC, usually on 6334"
            );
        }

        let mut builder = Qdrant::from_url(&cfg.qdrant_url);
        if let Some(key) = &cfg.qdrant_api_key {
            builder = builder.api_key(key.clone());
        }
        if cfg.skip_compatibility_check {
            builder = builder.skip_compatibility_check();
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Qdrant(format!("client build: {e}")))?;

        info!(
            url = %cfg.qdrant_url,
            with_api_key = cfg.qdrant_api_key.is_some(),
            "Qdrant client initialized"
        );

        Ok(Self { client })
    }
}

impl LyricsIndex for QdrantFacade {
    fn collection_names(&self) -> BoxFuture<'_, Result<Vec<String>, StoreError>> {
        Box::pin(async move {
            let res = self
                .client
                .list_collections()
                .await
                .map_err(|e| StoreError::Qdrant(format!("list_collections: {e}")))?;

            let names: Vec<String> = res.collections.into_iter().map(|c| c.name).collect();
            debug!(collections = names.len(), "list_collections completed");
            Ok(names)
        })
    }

    fn count<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<u64, StoreError>> {
        Box::pin(async move {
            let res = self
                .client
                .count(CountPointsBuilder::new(collection).exact(true))
                .await
                .map_err(|e| StoreError::Qdrant(format!("count: {e}")))?;

            let count = res
                .result
                .map(|r| r.count)
                .ok_or_else(|| StoreError::Qdrant("count: empty result".into()))?;

            debug!(collection, count, "count completed");
            Ok(count)
        })
    }

    fn query<'a>(
        &'a self,
        collection: &'a str,
        vector: Vec<f32>,
        limit: u64,
    ) -> BoxFuture<'a, Result<Vec<LyricHit>, StoreError>> {
        Box::pin(async move {
            info!(collection, limit, dim = vector.len(), "query_points");

            let res = self
                .client
                .query(
                    QueryPointsBuilder::new(collection)
                        .query(Query::new_nearest(vector))
                        .limit(limit)
                        .with_payload(true),
                )
                .await
                .map_err(|e| StoreError::Qdrant(format!("query_points: {e}")))?;

            let hits: Vec<LyricHit> = res.result.into_iter().map(LyricHit::from).collect();
            debug!(hits = hits.len(), "query_points completed");
            Ok(hits)
        })
    }
}
