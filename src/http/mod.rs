//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, query/body extraction)
//!     → api handlers
//!     → response.rs (validation errors, streamed text bodies)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{ApiJson, ApiQuery, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, FieldError};
pub use server::{build_router, AppState, HttpServer, ServerError};
