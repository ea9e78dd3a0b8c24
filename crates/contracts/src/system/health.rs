use serde::{Deserialize, Serialize};

/// Answer of the backend root route `GET /`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: Option<String>,
}
