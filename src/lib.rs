//! Mock Document Search API Library
//!
//! Stub endpoints for search, summarisation, synonyms, PDF summaries and
//! index insertion. Every response is canned or templated from the request.

pub mod api;
pub mod config;
pub mod dataset;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
