use crate::embed::BoxFuture;
use crate::errors::StoreError;
use crate::record::LyricHit;

/// The vector-store calls the service needs, kept behind a trait so
/// handlers can be exercised without a running Qdrant.
pub trait LyricsIndex: Send + Sync {
    /// Names of all collections on the server.
    fn collection_names(&self) -> BoxFuture<'_, Result<Vec<String>, StoreError>>;

    /// Exact number of points stored in `collection`.
    fn count<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<u64, StoreError>>;

    /// Nearest neighbours of `vector` in `collection`, payload attached,
    /// in the order the store returns them.
    fn query<'a>(
        &'a self,
        collection: &'a str,
        vector: Vec<f32>,
        limit: u64,
    ) -> BoxFuture<'a, Result<Vec<LyricHit>, StoreError>>;
}
