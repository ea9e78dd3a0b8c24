use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One result record keyed by column name
pub type Row = Map<String, Value>;

/// Answer of `POST /api/query`.
///
/// On failure the backend still answers 2xx with `error` set and, when it got
/// that far, the SQL it tried to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub generated_sql: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<Row>>,
    /// Seconds spent by the backend
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub cache_hit: Option<bool>,
}

impl QueryResponse {
    /// Error message, if the backend signalled one
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
