//! Interactive API documentation: `/openapi.json` and `/docs`.
//!
//! The document is generated from the handler annotations and the derived
//! request/response schemas.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{index, pdf, search, summarise, synonyms};
use crate::http::response::{FieldError, LocItem, ValidationErrorBody};
use crate::http::server::AppState;
use crate::models::{Message, SearchResult, SynonymResponse};

/// Path of the Swagger UI page referenced by the root message.
pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock doc search API",
        description = "Canned responses for the document search, summarisation and indexing endpoints."
    ),
    paths(
        crate::api::root,
        search::search,
        summarise::summarise,
        search::search_and_summarise,
        synonyms::synonyms,
        pdf::pdf_summary,
        index::add_to_index
    ),
    components(
        schemas(
            SearchResult,
            SynonymResponse,
            Message,
            summarise::SummariseRequest,
            index::AddToIndexRequest,
            ValidationErrorBody,
            FieldError,
            LocItem
        )
    ),
    tags(
        (name = "meta", description = "Service information"),
        (name = "search", description = "Search and synonym lookup"),
        (name = "summarise", description = "Streamed text summaries"),
        (name = "index", description = "Document ingestion")
    )
)]
pub struct ApiDoc;

/// Swagger UI at [`DOCS_PATH`] backed by the document at [`OPENAPI_PATH`].
pub fn router() -> Router<AppState> {
    SwaggerUi::new(DOCS_PATH)
        .url(OPENAPI_PATH, ApiDoc::openapi())
        .into()
}
