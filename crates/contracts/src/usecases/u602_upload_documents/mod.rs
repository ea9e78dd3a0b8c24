pub mod job;
pub mod response;

pub use job::{FileError, IngestionJob, JobStatus};
pub use response::UploadResponse;

use super::common::UseCaseMetadata;

pub struct UploadDocuments;

impl UploadDocuments {
    /// Multipart field carrying each uploaded file (repeated)
    pub const FILES_FIELD: &'static str = "files";
}

impl UseCaseMetadata for UploadDocuments {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "upload_documents"
    }

    fn display_name() -> &'static str {
        "Document Uploader"
    }

    fn description() -> &'static str {
        "Upload documents for ingestion"
    }
}
