//! `/synonyms`.
//!
//! Placeholder lookup: the query is required but not consulted, and the
//! same single-term table comes back for every request.

use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::dataset;
use crate::http::request::ApiQuery;
use crate::http::response::ValidationErrorBody;
use crate::models::SynonymResponse;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SynonymParams {
    /// Search phrase to pull synonyms from.
    pub query: String,
}

#[utoipa::path(
    get,
    path = "/synonyms",
    tag = "search",
    params(SynonymParams),
    responses(
        (status = 200, description = "Synonyms by term", body = SynonymResponse),
        (status = 422, description = "Invalid query string", body = ValidationErrorBody),
    )
)]
pub async fn synonyms(ApiQuery(params): ApiQuery<SynonymParams>) -> Json<SynonymResponse> {
    tracing::debug!(
        query = %params.query,
        "Synonym lookup not implemented, returning fixed mapping"
    );
    Json(SynonymResponse {
        term: dataset::mock_synonyms(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::test_support::get_json;

    #[tokio::test]
    async fn test_mapping_is_independent_of_query() {
        let expected = json!({
            "term": { "basalt": ["igneous rock", "volcanic rock", "mafic rock"] }
        });

        for query in ["Where%20can%20I%20find%20basalt", "granite", "zzz", ""] {
            let (status, body) = get_json(&format!("/synonyms?query={}", query)).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, expected, "query {:?}", query);
        }
    }

    #[tokio::test]
    async fn test_query_is_required() {
        let (status, body) = get_json("/synonyms").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["query", "query"]));
    }
}
