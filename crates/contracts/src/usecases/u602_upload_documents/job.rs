use serde::{Deserialize, Serialize};

/// Ingestion job as reported by `GET /api/ingest/status/{job_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionJob {
    pub status: JobStatus,
    #[serde(default)]
    pub processed: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub errors: Vec<FileError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Files are still being processed
    Processing,
    /// Every file was processed
    Completed,
    /// Finished, some files failed
    CompletedWithErrors,
    #[serde(other)]
    Unknown,
}

/// Per-file processing failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileError {
    pub file: String,
    pub error: String,
}

impl JobStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, JobStatus::Processing)
    }

    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Processing => "processing",
            JobStatus::Completed => "completed",
            JobStatus::CompletedWithErrors => "completed with errors",
            JobStatus::Unknown => "unknown",
        }
    }
}

impl IngestionJob {
    /// Job as known right after the upload returned, before any status fetch
    pub fn pending(status: JobStatus) -> Self {
        Self {
            status,
            processed: 0,
            total: 0,
            errors: Vec::new(),
        }
    }
}
