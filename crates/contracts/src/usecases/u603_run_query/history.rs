use serde::{Deserialize, Serialize};

/// Answer of `GET /api/query/history`, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    #[serde(default)]
    pub generated_sql: Option<String>,
    /// Seconds the query took when it was first run
    #[serde(default)]
    pub time: Option<f64>,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            generated_sql: None,
            time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_entries() {
        let json = r#"{"history":[{"query":"a","generated_sql":"SELECT * FROM employees;","time":0.12},{"query":"b"}]}"#;
        let resp: HistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.history.len(), 2);
        assert_eq!(resp.history[0].time, Some(0.12));
        assert_eq!(resp.history[1], HistoryEntry::new("b"));
    }
}
