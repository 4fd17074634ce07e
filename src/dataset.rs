//! Read-only mock data served by the stub endpoints.

use crate::models::{SearchResult, SynonymMap};

/// The fixed result list behind `/search`, in rank order.
pub fn mock_search_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            content: "Mock content from document 1".to_string(),
            document_id: "doc1".to_string(),
            rank: Some(1),
            score: Some(18.00),
            passage_id: Some(1),
        },
        SearchResult {
            content: "Mock content from document 2".to_string(),
            document_id: "doc2".to_string(),
            rank: Some(2),
            score: Some(17.96),
            passage_id: Some(2),
        },
    ]
}

/// The fixed table behind `/synonyms`.
pub fn mock_synonyms() -> SynonymMap {
    let mut map = SynonymMap::new();
    map.insert(
        "basalt".to_string(),
        vec![
            "igneous rock".to_string(),
            "volcanic rock".to_string(),
            "mafic rock".to_string(),
        ],
    );
    map
}

/// Number of leading items kept by a `[:k]` slice over `len` items.
///
/// Non-negative `k` is clamped to `len`. Negative `k` counts back from the
/// end, so `-1` drops the last item and anything at or below `-len` is empty.
pub fn leading_len(len: usize, k: i64) -> usize {
    if k >= 0 {
        usize::try_from(k).map_or(len, |k| k.min(len))
    } else {
        let drop = usize::try_from(k.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(drop)
    }
}

/// The first `k` mock results, using `leading_len` slicing.
pub fn top_k(k: i64) -> Vec<SearchResult> {
    let mut results = mock_search_results();
    results.truncate(leading_len(results.len(), k));
    results
}
