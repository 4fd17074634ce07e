//! Wire types shared by the mock endpoints.
//!
//! Every value here is built per request and dropped with the response.

pub mod search_result;
pub mod synonyms;

pub use search_result::SearchResult;
pub use synonyms::{SynonymMap, SynonymResponse};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{"message": ...}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
