//! `/search` and `/search-and-summarise`.

use axum::{response::Response, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::dataset;
use crate::http::request::ApiQuery;
use crate::http::response::{single_chunk_text, ValidationErrorBody};
use crate::models::SearchResult;

/// Number of results returned when `k` is not supplied.
pub const DEFAULT_K: i64 = 3;

fn default_k() -> i64 {
    DEFAULT_K
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Keywords or search terms to find in documents.
    pub query: String,
    /// Number of relevant documents to retrieve.
    #[serde(default = "default_k")]
    #[param(default = 3)]
    pub k: i64,
}

/// Return the first `k` mock results. `k` is not range-checked; see
/// [`dataset::leading_len`] for how negative values slice.
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = Vec<SearchResult>),
        (status = 422, description = "Invalid query string", body = ValidationErrorBody),
    )
)]
pub async fn search(ApiQuery(params): ApiQuery<SearchParams>) -> Json<Vec<SearchResult>> {
    let results = dataset::top_k(params.k);
    tracing::debug!(
        query = %params.query,
        k = params.k,
        returned = results.len(),
        "Mock search"
    );
    Json(results)
}

#[utoipa::path(
    get,
    path = "/search-and-summarise",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Streamed summary", body = String, content_type = "text/plain"),
        (status = 422, description = "Invalid query string", body = ValidationErrorBody),
    )
)]
pub async fn search_and_summarise(ApiQuery(params): ApiQuery<SearchParams>) -> Response {
    single_chunk_text(format!(
        "Mock combined search and summary for query: {} with {} results.",
        params.query, params.k
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::test_support::{get, get_json};

    #[tokio::test]
    async fn test_search_default_k_returns_whole_dataset() {
        let (status, body) = get_json("/search?query=basalt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {
                    "content": "Mock content from document 1",
                    "document_id": "doc1",
                    "rank": 1,
                    "score": 18.0,
                    "passage_id": 1
                },
                {
                    "content": "Mock content from document 2",
                    "document_id": "doc2",
                    "rank": 2,
                    "score": 17.96,
                    "passage_id": 2
                }
            ])
        );
    }

    #[tokio::test]
    async fn test_search_k_within_dataset() {
        for k in 0..=2usize {
            let (status, body) = get_json(&format!("/search?query=x&k={}", k)).await;
            assert_eq!(status, StatusCode::OK);
            let results = body.as_array().unwrap();
            assert_eq!(results.len(), k);
            for (i, result) in results.iter().enumerate() {
                assert_eq!(result["document_id"], format!("doc{}", i + 1));
            }
        }
    }

    #[tokio::test]
    async fn test_search_k_beyond_dataset_is_not_padded() {
        for k in [2, 3, 10, 1000] {
            let (_, body) = get_json(&format!("/search?query=x&k={}", k)).await;
            assert_eq!(body.as_array().unwrap().len(), 2);
        }
    }

    #[tokio::test]
    async fn test_search_negative_k_slices_from_end() {
        let (status, body) = get_json("/search?query=x&k=-1").await;
        assert_eq!(status, StatusCode::OK);
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["document_id"], "doc1");

        let (_, body) = get_json("/search?query=x&k=-2").await;
        assert_eq!(body, json!([]));

        let (_, body) = get_json("/search?query=x&k=-7").await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (status, body) = get_json("/search?k=1").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["query", "query"]));
    }

    #[tokio::test]
    async fn test_search_rejects_non_integer_k() {
        let (status, body) = get_json("/search?query=x&k=three").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"][0], "query");
    }

    #[tokio::test]
    async fn test_search_and_summarise() {
        let (status, headers, body) = get("/search-and-summarise?query=lava%20flows&k=5").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers["content-type"].to_str().unwrap().starts_with("text/plain"));
        assert_eq!(
            body,
            "Mock combined search and summary for query: lava flows with 5 results."
        );

        let (_, _, body) = get("/search-and-summarise?query=q").await;
        assert!(body.ends_with("with 3 results."));
    }
}
