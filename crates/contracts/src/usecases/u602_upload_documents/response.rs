use serde::{Deserialize, Serialize};

use super::job::JobStatus;

/// Answer of `POST /api/ingest/documents`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Ingestion job created for this batch
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
}
