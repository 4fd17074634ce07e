//! Mock API routes.
//!
//! # Data Flow
//! ```text
//! Request
//!     → ApiQuery / ApiJson (shape validation, 422 on failure)
//!     → handler (format literal or templated body)
//!     → dataset.rs (read-only constants)
//! ```
//!
//! Handlers hold no state and never fail once their input is extracted.

pub mod docs;
pub mod index;
pub mod pdf;
pub mod search;
pub mod summarise;
pub mod synonyms;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};

use crate::http::server::AppState;
use crate::models::Message;

/// Every route served by the API, before middleware and state are applied.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/search", get(search::search))
        .route("/summarise", post(summarise::summarise))
        .route("/search-and-summarise", get(search::search_and_summarise))
        .route("/synonyms", get(synonyms::synonyms))
        .route("/pdfsummary", get(pdf::pdf_summary))
        .route("/add-to-index", post(index::add_to_index))
        .merge(docs::router())
}

/// Welcome message pointing at the interactive docs.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Welcome message", body = Message))
)]
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> Json<Message> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(&state.config.listener.bind_address);

    Json(Message::new(format!(
        "Mock doc search API - see docs at http://{}{}",
        host,
        docs::DOCS_PATH
    )))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        body::Body,
        http::{HeaderMap, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::http::server::build_router;

    async fn send(req: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let router = build_router(&ServerConfig::default());
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get(uri: &str) -> (StatusCode, HeaderMap, String) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    pub async fn post_raw(
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, HeaderMap, String) {
        let req = Request::post(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        send(req).await
    }

    /// POST with no `Content-Type` header at all.
    pub async fn post_untyped(uri: &str, body: &str) -> (StatusCode, HeaderMap, String) {
        send(Request::post(uri).body(Body::from(body.to_string())).unwrap()).await
    }

    pub async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, HeaderMap, String) {
        post_raw(uri, "application/json", &body.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::test_support::{get, get_json};
    use crate::config::ServerConfig;
    use crate::http::server::build_router;

    #[tokio::test]
    async fn test_root_uses_host_header() {
        let router = build_router(&ServerConfig::default());
        let req = Request::get("/")
            .header("host", "search.local:8000")
            .body(Body::empty())
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["message"],
            "Mock doc search API - see docs at http://search.local:8000/docs"
        );
    }

    #[tokio::test]
    async fn test_root_falls_back_to_bind_address() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Mock doc search API - see docs at http://127.0.0.1:8000/docs"
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let (status, _, _) = get("/add-to-index").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_responses_are_marked_and_tagged() {
        let (_, headers, _) = get("/synonyms?query=basalt").await;
        assert_eq!(headers["x-mock-response"], "true");
        assert!(headers.contains_key("x-request-id"));
    }
}
