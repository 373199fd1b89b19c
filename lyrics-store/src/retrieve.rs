//! Retrieval: embed the query text, then ask the index for neighbours.

use tracing::{debug, trace};

use crate::embed::EmbeddingsProvider;
use crate::errors::StoreError;
use crate::index::LyricsIndex;
use crate::record::LyricHit;

/// Embeds `query` and returns the `limit` nearest lyrics in `collection`.
///
/// Hits keep the index's order. Nothing is retried.
///
/// # Errors
/// Returns embedding errors or Qdrant failures as-is.
pub async fn search_lyrics(
    provider: &dyn EmbeddingsProvider,
    index: &dyn LyricsIndex,
    collection: &str,
    query: &str,
    limit: u64,
) -> Result<Vec<LyricHit>, StoreError> {
    trace!("retrieve::search_lyrics collection={collection} limit={limit}");

    let vector = provider.embed(query).await?;
    debug!(dim = vector.len(), "query embedded");

    index.query(collection, vector, limit).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{Map, json};

    use super::*;
    use crate::embed::BoxFuture;

    struct FixedEmbedder(Vec<f32>);

    impl EmbeddingsProvider for FixedEmbedder {
        fn embed<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Result<Vec<f32>, StoreError>> {
            let v = self.0.clone();
            Box::pin(async move { Ok(v) })
        }
    }

    struct FailingEmbedder;

    impl EmbeddingsProvider for FailingEmbedder {
        fn embed<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Result<Vec<f32>, StoreError>> {
            Box::pin(async { Err(StoreError::Embedding("quota exceeded".into())) })
        }
    }

    #[derive(Default)]
    struct RecordingIndex {
        calls: Mutex<Vec<(String, Vec<f32>, u64)>>,
    }

    impl LyricsIndex for RecordingIndex {
        fn collection_names(&self) -> BoxFuture<'_, Result<Vec<String>, StoreError>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn count<'a>(&'a self, _collection: &'a str) -> BoxFuture<'a, Result<u64, StoreError>> {
            Box::pin(async { Ok(0) })
        }

        fn query<'a>(
            &'a self,
            collection: &'a str,
            vector: Vec<f32>,
            limit: u64,
        ) -> BoxFuture<'a, Result<Vec<LyricHit>, StoreError>> {
            self.calls
                .lock()
                .unwrap()
                .push((collection.to_string(), vector, limit));
            Box::pin(async {
                let mut payload = Map::new();
                payload.insert("title".into(), json!("Love Story"));
                Ok(vec![
                    LyricHit::new(0.9, payload),
                    LyricHit::new(0.4, Map::new()),
                ])
            })
        }
    }

    #[tokio::test]
    async fn passes_embedding_and_limit_to_index() {
        let index = RecordingIndex::default();
        let hits = search_lyrics(
            &FixedEmbedder(vec![0.1, 0.2]),
            &index,
            "taylor_swift_lyrics",
            "love story",
            2,
        )
        .await
        .unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title(), Some("Love Story"));

        let calls = index.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("taylor_swift_lyrics".to_string(), vec![0.1, 0.2], 2)]
        );
    }

    #[tokio::test]
    async fn embedding_failure_skips_index() {
        let index = RecordingIndex::default();
        let err = search_lyrics(&FailingEmbedder, &index, "c", "q", 5)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "embedding error: quota exceeded");
        assert!(index.calls.lock().unwrap().is_empty());
    }
}
