//! `/add-to-index`.
//!
//! Acknowledges the document and discards it. Nothing is stored.

use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::http::request::ApiJson;
use crate::http::response::ValidationErrorBody;
use crate::models::Message;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToIndexRequest {
    /// The content of the document.
    pub doc: String,
    /// The ID of the document.
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/add-to-index",
    tag = "index",
    request_body = AddToIndexRequest,
    responses(
        (status = 200, description = "Acknowledgement", body = Message),
        (status = 415, description = "Body is not JSON", body = ValidationErrorBody),
        (status = 422, description = "Invalid body", body = ValidationErrorBody),
    )
)]
pub async fn add_to_index(ApiJson(request): ApiJson<AddToIndexRequest>) -> Json<Message> {
    tracing::info!(
        id = %request.id,
        bytes = request.doc.len(),
        "Mock index insert, document discarded"
    );
    Json(Message::new(format!(
        "Mock response: Added document {} to index successfully.",
        request.id
    )))
}
