//! Search hits returned by the lyrics index.

use std::collections::HashMap;

use qdrant_client::qdrant::{ScoredPoint, Value as QValue};
use serde_json::{Map, Value};

/// Payload keys written by the ingestion job that built the collection.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_ALBUM: &str = "album";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_LYRIC: &str = "lyric";

/// A single scored point with its payload converted to JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct LyricHit {
    /// Similarity score as reported by Qdrant.
    pub score: f32,
    /// Point payload; empty when the point has none.
    pub payload: Map<String, Value>,
}

impl LyricHit {
    pub fn new(score: f32, payload: Map<String, Value>) -> Self {
        Self { score, payload }
    }

    /// Payload value by key; JSON `null` counts as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key).filter(|v| !v.is_null())
    }

    /// String payload value by key; non-string values count as absent.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text_field(FIELD_TITLE)
    }

    pub fn album(&self) -> Option<&str> {
        self.text_field(FIELD_ALBUM)
    }

    /// Year is passed through untyped: the dataset stores it as a number or a string.
    pub fn year(&self) -> Option<&Value> {
        self.field(FIELD_YEAR)
    }

    /// Full lyric text, empty when missing.
    pub fn lyric(&self) -> &str {
        self.text_field(FIELD_LYRIC).unwrap_or_default()
    }
}

impl From<ScoredPoint> for LyricHit {
    fn from(sp: ScoredPoint) -> Self {
        Self {
            score: sp.score,
            payload: qpayload_to_json(sp.payload),
        }
    }
}

/// Converts a Qdrant payload into a JSON object.
fn qpayload_to_json(payload: HashMap<String, QValue>) -> Map<String, Value> {
    payload
        .into_iter()
        .map(|(k, v)| (k, v.into_json()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scored(score: f32, fields: &[(&str, QValue)]) -> ScoredPoint {
        ScoredPoint {
            score,
            payload: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn converts_scored_point_payload() {
        let hit = LyricHit::from(scored(
            0.87,
            &[
                ("title", QValue::from("Love Story")),
                ("album", QValue::from("Fearless")),
                ("year", QValue::from(2008_i64)),
                ("lyric", QValue::from("We were both young...")),
            ],
        ));

        assert_eq!(hit.score, 0.87);
        assert_eq!(hit.title(), Some("Love Story"));
        assert_eq!(hit.album(), Some("Fearless"));
        assert_eq!(hit.year(), Some(&json!(2008)));
        assert_eq!(hit.lyric(), "We were both young...");
    }

    #[test]
    fn missing_fields_are_absent() {
        let hit = LyricHit::from(scored(0.5, &[]));
        assert_eq!(hit.title(), None);
        assert_eq!(hit.album(), None);
        assert_eq!(hit.year(), None);
        assert_eq!(hit.lyric(), "");
    }

    #[test]
    fn null_and_non_string_values() {
        let mut payload = Map::new();
        payload.insert("title".into(), Value::Null);
        payload.insert("album".into(), json!(7));
        payload.insert("year".into(), json!("2012"));
        payload.insert("lyric".into(), json!(["not", "text"]));
        let hit = LyricHit::new(0.1, payload);

        assert_eq!(hit.title(), None);
        assert_eq!(hit.album(), None);
        assert_eq!(hit.year(), Some(&json!("2012")));
        assert_eq!(hit.lyric(), "");
    }
}
