use serde::Serialize;

/// Body of GET /api/health.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum HealthResponse {
    Healthy {
        status: &'static str,
        /// Whether the lyrics collection is present on the server.
        collection_exists: bool,
        /// Number of stored songs.
        songs: u64,
        collection: String,
    },
    Unhealthy {
        status: &'static str,
        error: String,
    },
}

impl HealthResponse {
    pub fn healthy(collection: String, collection_exists: bool, songs: u64) -> Self {
        HealthResponse::Healthy {
            status: "healthy",
            collection_exists,
            songs,
            collection,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        HealthResponse::Unhealthy {
            status: "unhealthy",
            error: error.into(),
        }
    }
}
