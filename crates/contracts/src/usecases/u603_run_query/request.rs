use serde::{Deserialize, Serialize};

/// Body of `POST /api/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw natural-language text, untrimmed
    pub query: String,
}
