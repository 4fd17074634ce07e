//! Response construction.
//!
//! # Responsibilities
//! - Map request validation failures to structured client errors
//! - Build the single-chunk streamed text bodies

use std::convert::Infallible;

use axum::{
    body::{Body, Bytes},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures_util::stream;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Content type of the streamed text endpoints.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// One segment of a [`FieldError`] location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LocItem {
    Field(String),
    Index(usize),
}

impl From<&str> for LocItem {
    fn from(field: &str) -> Self {
        LocItem::Field(field.to_string())
    }
}

/// One failed field in a validation error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Location of the failure: `"query"` or `"body"`, then the path to the field.
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    /// Build from a serde message such as
    /// ``results_context[0]: missing field `content` at line 1 column 60``.
    ///
    /// A leading field path becomes part of `loc`, and so does the name of a
    /// missing field.
    pub fn from_message(location: &str, msg: String) -> Self {
        let mut loc = vec![LocItem::from(location)];
        let detail = match split_path(&msg) {
            Some((path, rest)) => {
                loc.extend(parse_path(path));
                rest
            }
            None => msg.as_str(),
        };
        let kind = match missing_field(detail) {
            Some(field) => {
                loc.push(LocItem::from(field));
                "missing"
            }
            None => "invalid",
        };
        Self {
            loc,
            msg,
            kind: kind.to_string(),
        }
    }

    /// An error that applies to the whole body.
    pub fn body(msg: String, kind: &str) -> Self {
        Self {
            loc: vec![LocItem::from("body")],
            msg,
            kind: kind.to_string(),
        }
    }
}

/// Split `path: detail`, where the path is a dotted field path with `[n]` indices.
fn split_path(msg: &str) -> Option<(&str, &str)> {
    let (path, rest) = msg.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '[' | ']' | '-'));
    is_path.then_some((path, rest))
}

fn parse_path(path: &str) -> Vec<LocItem> {
    let mut items = Vec::new();
    for segment in path.split('.') {
        let mut parts = segment.split('[');
        if let Some(name) = parts.next().filter(|n| !n.is_empty()) {
            items.push(LocItem::from(name));
        }
        for index in parts {
            let index = index.trim_end_matches(']');
            match index.parse() {
                Ok(i) => items.push(LocItem::Index(i)),
                Err(_) => items.push(LocItem::from(index)),
            }
        }
    }
    items
}

/// Extract `name` from serde's "missing field `name`".
fn missing_field(msg: &str) -> Option<&str> {
    let rest = &msg[msg.find("missing field `")? + "missing field `".len()..];
    rest.split('`').next().filter(|s| !s.is_empty())
}

/// Body of every 4xx produced by request extraction.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

/// Errors returned to clients by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The body could not be read at all (too large, connection error).
    #[error("{message}")]
    Body { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Body { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Validation(errors) => errors,
            ApiError::UnsupportedMediaType(msg) => {
                vec![FieldError::body(msg, "unsupported_media_type")]
            }
            ApiError::Body { message, .. } => vec![FieldError::body(message, "body_unreadable")],
        };

        tracing::debug!(status = %status, ?detail, "Rejected request");
        (status, Json(ValidationErrorBody { detail })).into_response()
    }
}

/// A `text/plain` response whose body is streamed as exactly one chunk.
pub fn single_chunk_text(text: String) -> Response {
    let chunks = stream::once(async move { Ok::<_, Infallible>(Bytes::from(text)) });
    (
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)],
        Body::from_stream(chunks),
    )
        .into_response()
}
