use lyrics_store::LyricHit;
use serde::Serialize;
use serde_json::Value;

/// Max characters of lyric text shown per hit.
pub const LYRIC_PREVIEW_CHARS: usize = 200;

/// Appended to a preview when the lyric was cut.
pub const ELLIPSIS: &str = "...";

/// Response payload for /api/search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    /// Always `results.len()`.
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

impl SearchResponse {
    pub fn new(query: String, results: Vec<SearchResultItem>) -> Self {
        Self {
            query,
            count: results.len(),
            results,
        }
    }
}

/// One formatted hit.
#[derive(Debug, Serialize, PartialEq)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub album: Option<String>,
    pub year: Option<Value>,
    pub lyric_preview: String,
    pub score: f32,
    /// `score * 100`, rounded to 2 decimals.
    pub relevance_percent: f64,
}

impl From<&LyricHit> for SearchResultItem {
    fn from(hit: &LyricHit) -> Self {
        Self {
            title: hit.title().map(str::to_owned),
            album: hit.album().map(str::to_owned),
            year: hit.year().cloned(),
            lyric_preview: lyric_preview(hit.lyric()),
            score: hit.score,
            relevance_percent: relevance_percent(hit.score),
        }
    }
}

/// First [`LYRIC_PREVIEW_CHARS`] characters of `lyric`, plus [`ELLIPSIS`] if anything was cut.
pub fn lyric_preview(lyric: &str) -> String {
    match lyric.char_indices().nth(LYRIC_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &lyric[..cut]),
        None => lyric.to_string(),
    }
}

/// `score * 100` rounded to 2 decimals, half to even.
///
/// Works on the shortest decimal form of `score`, which is what the response
/// serializes, so the two fields always agree.
pub fn relevance_percent(score: f32) -> f64 {
    let emitted = score
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(score));
    let pct = emitted * 100.0;
    format!("{pct:.2}").parse().unwrap_or(pct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    #[test]
    fn short_lyric_is_unchanged() {
        assert_eq!(lyric_preview("We were both young..."), "We were both young...");
        assert_eq!(lyric_preview(""), "");

        let exact = "a".repeat(LYRIC_PREVIEW_CHARS);
        assert_eq!(lyric_preview(&exact), exact);
    }

    #[test]
    fn long_lyric_is_cut_at_200_chars() {
        let lyric = format!("{}{}", "b".repeat(LYRIC_PREVIEW_CHARS), "tail");
        let preview = lyric_preview(&lyric);
        assert_eq!(preview, format!("{}...", "b".repeat(LYRIC_PREVIEW_CHARS)));
    }

    #[test]
    fn cut_counts_characters_not_bytes() {
        let lyric = "é".repeat(LYRIC_PREVIEW_CHARS + 1);
        let preview = lyric_preview(&lyric);
        assert_eq!(preview.chars().count(), LYRIC_PREVIEW_CHARS + ELLIPSIS.len());
        assert!(preview.starts_with(&"é".repeat(LYRIC_PREVIEW_CHARS)));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(relevance_percent(0.87), 87.0);
        assert_eq!(relevance_percent(0.0), 0.0);
        assert_eq!(relevance_percent(1.0), 100.0);
        assert_eq!(relevance_percent(0.123456), 12.35);
        assert_eq!(relevance_percent(0.5), 50.0);
    }

    #[test]
    fn percent_follows_decimal_score_not_widened_f32() {
        // f64::from(0.28345_f32) is 0.28345000743..., which would round up.
        assert_eq!(relevance_percent(0.28345), 28.34);
        assert_eq!(relevance_percent(0.35825), 35.83);
        assert_eq!(relevance_percent(0.55415), 55.42);
        assert_eq!(relevance_percent(0.61515), 61.52);
        assert_eq!(relevance_percent(0.12345), 12.35);
        assert_eq!(relevance_percent(0.99999), 100.0);
    }

    #[test]
    fn serialized_score_and_percent_agree() {
        let item = SearchResultItem::from(&LyricHit::new(0.28345, Map::new()));
        let wire = serde_json::to_string(&item).unwrap();
        assert!(wire.contains(r#""score":0.28345"#), "{wire}");
        assert!(wire.contains(r#""relevance_percent":28.34"#), "{wire}");
    }

    #[test]
    fn item_from_hit_keeps_nulls() {
        let mut payload = Map::new();
        payload.insert("title".into(), json!("Love Story"));
        payload.insert("lyric".into(), json!("We were both young..."));
        let item = SearchResultItem::from(&LyricHit::new(0.87, payload));
        let wire: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();

        assert_eq!(
            wire,
            json!({
                "title": "Love Story",
                "album": null,
                "year": null,
                "lyric_preview": "We were both young...",
                "score": 0.87,
                "relevance_percent": 87.0
            })
        );
    }

    #[test]
    fn count_tracks_results() {
        let items = vec![
            SearchResultItem::from(&LyricHit::new(0.9, Map::new())),
            SearchResultItem::from(&LyricHit::new(0.8, Map::new())),
        ];
        let resp = SearchResponse::new("red".into(), items);
        assert_eq!(resp.count, resp.results.len());
    }
}
