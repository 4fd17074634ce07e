//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Extract query strings and JSON bodies, turning rejections into
//!   structured validation errors
//! - Read a body sent without a `Content-Type` as JSON; an explicit
//!   non-JSON type is still refused
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Extractor rejections never reach the client as plain text

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{
        header::{self, HeaderName},
        request::Parts,
        HeaderValue,
    },
    Json,
};
use serde::de::DeserializeOwned;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::{ApiError, FieldError};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID assigned to a request, if any.
pub fn request_id<B>(request: &axum::http::Request<B>) -> &str {
    request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Query string extractor whose rejection is an [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

/// JSON body extractor whose rejection is an [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if req.headers().contains_key(header::CONTENT_TYPE) {
            Json::<T>::from_request(req, state).await
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(bytes_rejection)?;
            Json::<T>::from_bytes(&bytes)
        };

        match parsed {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    let msg = strip_prefix(rejection.body_text());
    ApiError::Validation(vec![FieldError::from_message("query", msg)])
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::MissingJsonContentType(r) => ApiError::UnsupportedMediaType(r.body_text()),
        JsonRejection::JsonSyntaxError(r) => ApiError::Validation(vec![FieldError::body(
            strip_prefix(r.body_text()),
            "json_invalid",
        )]),
        JsonRejection::BytesRejection(r) => bytes_rejection(r),
        other => {
            let msg = strip_prefix(other.body_text());
            ApiError::Validation(vec![FieldError::from_message("body", msg)])
        }
    }
}

fn bytes_rejection(rejection: BytesRejection) -> ApiError {
    ApiError::Body {
        status: rejection.status(),
        message: rejection.body_text(),
    }
}

/// Drop axum's generic "Failed to deserialize ...: " lead-in, keeping serde's detail.
fn strip_prefix(text: String) -> String {
    const PREFIXES: [&str; 3] = [
        "Failed to deserialize query string: ",
        "Failed to deserialize the JSON body into the target type: ",
        "Failed to parse the request body as JSON: ",
    ];
    for prefix in PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    text
}
