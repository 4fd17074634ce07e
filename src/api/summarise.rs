//! `/summarise`.

use axum::response::Response;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::http::request::ApiJson;
use crate::http::response::{single_chunk_text, ValidationErrorBody};
use crate::models::SearchResult;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummariseRequest {
    /// The user's query.
    pub query: String,
    /// Search results to summarise; each entry must be a well-formed result.
    pub results_context: Vec<SearchResult>,
}

#[utoipa::path(
    post,
    path = "/summarise",
    tag = "summarise",
    request_body = SummariseRequest,
    responses(
        (status = 200, description = "Streamed summary", body = String, content_type = "text/plain"),
        (status = 415, description = "Body is not JSON", body = ValidationErrorBody),
        (status = 422, description = "Invalid body", body = ValidationErrorBody),
    )
)]
pub async fn summarise(ApiJson(request): ApiJson<SummariseRequest>) -> Response {
    single_chunk_text(format!(
        "Mock summary for query: {} based on {} documents.",
        request.query,
        request.results_context.len()
    ))
}
