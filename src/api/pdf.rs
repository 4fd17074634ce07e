//! `/pdfsummary`.

use axum::response::Response;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::http::request::ApiQuery;
use crate::http::response::{single_chunk_text, ValidationErrorBody};

fn default_sampling_method() -> String {
    "truncate".to_string()
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PdfSummaryParams {
    /// Id of the document to summarise.
    pub document_id: String,
    /// Optional system prompt for the summariser. Accepted, not used.
    #[serde(default)]
    pub system_prompt: String,
    /// Sampling method when the document exceeds the model limit. Accepted, not used.
    #[serde(default = "default_sampling_method")]
    #[param(default = "truncate")]
    pub sampling_method: String,
}

#[utoipa::path(
    get,
    path = "/pdfsummary",
    tag = "summarise",
    params(PdfSummaryParams),
    responses(
        (status = 200, description = "Streamed summary", body = String, content_type = "text/plain"),
        (status = 422, description = "Invalid query string", body = ValidationErrorBody),
    )
)]
pub async fn pdf_summary(ApiQuery(params): ApiQuery<PdfSummaryParams>) -> Response {
    tracing::debug!(
        document_id = %params.document_id,
        system_prompt_len = params.system_prompt.len(),
        sampling_method = %params.sampling_method,
        "Mock PDF summary"
    );
    single_chunk_text(format!(
        "Mock PDF summary for document: {}",
        params.document_id
    ))
}
