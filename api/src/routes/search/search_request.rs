use serde::Deserialize;

/// Number of hits returned when the client omits `limit`.
pub const DEFAULT_LIMIT: u64 = 5;

/// Request payload for /api/search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; required and non-empty.
    #[serde(default)]
    pub query: Option<String>,
    /// Optional number of hits (default 5).
    #[serde(default)]
    pub limit: Option<u64>,
}

impl SearchRequest {
    /// The query if present and non-empty.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_five() {
        let req: SearchRequest = serde_json::from_str(r#"{"query":"red"}"#).unwrap();
        assert_eq!(req.query(), Some("red"));
        assert_eq!(req.limit(), 5);

        let req: SearchRequest = serde_json::from_str(r#"{"query":"red","limit":null}"#).unwrap();
        assert_eq!(req.limit(), 5);
    }

    #[test]
    fn empty_query_counts_as_missing() {
        let req: SearchRequest = serde_json::from_str(r#"{"query":""}"#).unwrap();
        assert_eq!(req.query(), None);

        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.query(), None);
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert!(serde_json::from_str::<SearchRequest>(r#"{"query":"a","limit":-1}"#).is_err());
    }
}
