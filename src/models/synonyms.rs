use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Term → ordered list of synonyms.
pub type SynonymMap = BTreeMap<String, Vec<String>>;

/// Body of `GET /synonyms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SynonymResponse {
    #[schema(value_type = BTreeMap<String, Vec<String>>)]
    pub term: SynonymMap,
}
