use contracts::usecases::u602_upload_documents::{IngestionJob, UploadResponse};

use crate::shared::api_utils::ApiError;
use crate::shared::components::StatusTone;
use crate::shared::state::{RequestSeq, Ticket};

pub const NO_FILES_WARNING: &str = "⚠️ Please select files to upload.";
pub const UPLOADING: &str = "Uploading...";
pub const UPLOADED_FALLBACK: &str = "Documents uploaded successfully!";
pub const REJECTED_FALLBACK: &str = "Unknown error";
pub const UNREACHABLE: &str = "❌ Backend connection error";

/// Anything the uploader can hold as a selected file
pub trait NamedFile {
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadStatus {
    #[default]
    Idle,
    /// Upload requested with nothing selected
    Invalid,
    Uploading,
    /// Carries the backend message (or the generic one)
    Uploaded(String),
    /// Carries the backend error (or the generic one)
    Rejected(String),
    Unreachable,
}

/// State of the document uploader panel
#[derive(Clone, Debug, PartialEq)]
pub struct UploadState<F> {
    pub files: Vec<F>,
    pub status: UploadStatus,
    /// Ingestion job created by the latest successful upload
    pub job_id: Option<String>,
    pub job: Option<IngestionJob>,
    /// A fetched job status reported a terminal state
    job_settled: bool,
    seq: RequestSeq,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            status: UploadStatus::Idle,
            job_id: None,
            job: None,
            job_settled: false,
            seq: RequestSeq::new(),
        }
    }
}

impl<F> UploadState<F> {
    /// Replaces the whole selection; selections never accumulate.
    pub fn select(mut self, files: Vec<F>) -> Self {
        self.files = files;
        self.status = UploadStatus::Idle;
        self.job_id = None;
        self.job = None;
        self.job_settled = false;
        self
    }

    pub fn begin(mut self) -> (Self, Option<Ticket>) {
        if self.files.is_empty() {
            self.status = UploadStatus::Invalid;
            return (self, None);
        }
        let ticket = self.seq.issue();
        self.status = UploadStatus::Uploading;
        self.job_id = None;
        self.job = None;
        self.job_settled = false;
        (self, Some(ticket))
    }

    pub fn resolve(mut self, ticket: Ticket, outcome: Result<UploadResponse, ApiError>) -> Self {
        if !self.seq.is_current(ticket) {
            log::debug!("uploader: dropping stale response {}", ticket);
            return self;
        }
        match outcome {
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| UPLOADED_FALLBACK.to_string());
                self.status = UploadStatus::Uploaded(message);
                self.job = response
                    .job_id
                    .as_ref()
                    .and(response.status)
                    .map(IngestionJob::pending);
                self.job_id = response.job_id;
            }
            Err(ApiError::Transport(_)) => self.status = UploadStatus::Unreachable,
            Err(e) => self.status = UploadStatus::Rejected(e.user_message(REJECTED_FALLBACK)),
        }
        self
    }

    /// Records a job status fetched on behalf of `ticket`'s upload
    pub fn job_updated(mut self, ticket: Ticket, job: IngestionJob) -> Self {
        if self.seq.is_current(ticket) && self.job_id.is_some() {
            self.job_settled = job.status.is_finished();
            self.job = Some(job);
        }
        self
    }

    /// Whether the job started by `ticket`'s upload should still be polled
    pub fn should_poll(&self, ticket: Ticket) -> bool {
        self.seq.is_current(ticket) && self.job_id.is_some() && !self.job_settled
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            UploadStatus::Idle => String::new(),
            UploadStatus::Invalid => NO_FILES_WARNING.to_string(),
            UploadStatus::Uploading => UPLOADING.to_string(),
            UploadStatus::Uploaded(message) => format!("✅ {}", message),
            UploadStatus::Rejected(error) => format!("❌ Upload failed: {}", error),
            UploadStatus::Unreachable => UNREACHABLE.to_string(),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self.status {
            UploadStatus::Uploaded(_) => StatusTone::Success,
            UploadStatus::Rejected(_) | UploadStatus::Unreachable => StatusTone::Error,
            _ => StatusTone::Neutral,
        }
    }
}

impl<F: NamedFile> UploadState<F> {
    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(NamedFile::file_name).collect()
    }
}

/// One-line summary of a job, e.g. "Job 1a2b: completed with errors (1/2 files)"
pub fn job_summary(job_id: &str, job: &IngestionJob) -> String {
    if job.total == 0 {
        format!("Job {}: {}", job_id, job.status.label())
    } else {
        format!(
            "Job {}: {} ({}/{} files)",
            job_id,
            job.status.label(),
            job.processed,
            job.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::{rejected, ErrorField};
    use contracts::usecases::u602_upload_documents::{FileError, JobStatus};

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl NamedFile for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn selected(names: &[&'static str]) -> UploadState<FakeFile> {
        UploadState::default().select(names.iter().copied().map(FakeFile).collect())
    }

    #[test]
    fn test_selection_replaces_previous_set() {
        let state = selected(&["a.pdf", "b.docx"]).select(vec![FakeFile("c.txt")]);
        assert_eq!(state.file_names(), vec!["c.txt"]);
    }

    #[test]
    fn test_selection_clears_status() {
        let (state, _) = UploadState::<FakeFile>::default().begin();
        assert_eq!(state.status_text(), NO_FILES_WARNING);
        let state = state.select(vec![FakeFile("a.pdf")]);
        assert_eq!(state.status, UploadStatus::Idle);
        assert_eq!(state.status_text(), "");
    }

    #[test]
    fn test_empty_selection_issues_no_request() {
        let (state, ticket) = UploadState::<FakeFile>::default().begin();
        assert!(ticket.is_none());
        assert_eq!(state.status, UploadStatus::Invalid);
    }

    #[test]
    fn test_uploading_status() {
        let (state, ticket) = selected(&["a.pdf"]).begin();
        assert!(ticket.is_some());
        assert!(state.is_uploading());
        assert_eq!(state.status_text(), UPLOADING);
        assert_eq!(state.tone(), StatusTone::Neutral);
    }

    #[test]
    fn test_success_message() {
        let (state, ticket) = selected(&["a.pdf"]).begin();
        let state = state.resolve(
            ticket.unwrap(),
            Ok(UploadResponse {
                message: Some("2 documents indexed".into()),
                ..Default::default()
            }),
        );
        assert_eq!(state.status_text(), "✅ 2 documents indexed");
        assert_eq!(state.tone(), StatusTone::Success);

        let (state, ticket) = state.begin();
        let state = state.resolve(ticket.unwrap(), Ok(UploadResponse::default()));
        assert_eq!(state.status_text(), "✅ Documents uploaded successfully!");
        assert_eq!(state.job_id, None);
    }

    #[test]
    fn test_failure_messages() {
        let (state, ticket) = selected(&["a.pdf"]).begin();
        let state = state.resolve(
            ticket.unwrap(),
            Err(ApiError::Rejected {
                status: 500,
                message: Some("disk full".into()),
            }),
        );
        assert_eq!(state.status_text(), "❌ Upload failed: disk full");

        let (state, ticket) = state.begin();
        let state = state.resolve(
            ticket.unwrap(),
            Err(ApiError::Rejected {
                status: 422,
                message: None,
            }),
        );
        assert_eq!(state.status_text(), "❌ Upload failed: Unknown error");

        let (state, ticket) = state.begin();
        let state = state.resolve(ticket.unwrap(), Err(ApiError::Transport("offline".into())));
        assert_eq!(state.status_text(), UNREACHABLE);
        assert_eq!(state.tone(), StatusTone::Error);
    }

    #[test]
    fn test_non_json_error_page_reads_as_unreachable() {
        let (state, ticket) = selected(&["a.pdf"]).begin();
        let err = rejected(500, "Internal Server Error", ErrorField::Error);
        let state = state.resolve(ticket.unwrap(), Err(err));
        assert_eq!(state.status_text(), UNREACHABLE);
    }

    #[test]
    fn test_job_tracking() {
        let (state, ticket) = selected(&["a.pdf", "b.pdf"]).begin();
        let ticket = ticket.unwrap();
        let state = state.resolve(
            ticket,
            Ok(UploadResponse {
                message: None,
                job_id: Some("job-1".into()),
                status: Some(JobStatus::CompletedWithErrors),
            }),
        );
        assert_eq!(state.job_id.as_deref(), Some("job-1"));
        assert_eq!(state.job, Some(IngestionJob::pending(JobStatus::CompletedWithErrors)));
        // Counts are not known until the job itself is fetched
        assert!(state.should_poll(ticket));

        let job = IngestionJob {
            status: JobStatus::CompletedWithErrors,
            processed: 1,
            total: 2,
            errors: vec![FileError {
                file: "b.pdf".into(),
                error: "unsupported".into(),
            }],
        };
        let state = state.job_updated(ticket, job.clone());
        assert_eq!(state.job, Some(job.clone()));
        assert!(!state.should_poll(ticket));
        assert_eq!(
            job_summary("job-1", &job),
            "Job job-1: completed with errors (1/2 files)"
        );
    }

    #[test]
    fn test_new_upload_abandons_previous_job() {
        let (state, first) = selected(&["a.pdf"]).begin();
        let first = first.unwrap();
        let state = state.resolve(
            first,
            Ok(UploadResponse {
                job_id: Some("job-1".into()),
                status: Some(JobStatus::Processing),
                ..Default::default()
            }),
        );
        assert!(state.should_poll(first));

        let (state, _second) = state.begin();
        assert!(!state.should_poll(first));
        let state = state.job_updated(first, IngestionJob::pending(JobStatus::Completed));
        assert_eq!(state.job, None);
    }

    #[test]
    fn test_stale_upload_response_is_ignored() {
        let (state, first) = selected(&["a.pdf"]).begin();
        let (state, second) = state.begin();
        let state = state.resolve(second.unwrap(), Err(ApiError::Transport("x".into())));
        let state = state.resolve(first.unwrap(), Ok(UploadResponse::default()));
        assert_eq!(state.status, UploadStatus::Unreachable);
    }

    #[test]
    fn test_job_summary_without_counts() {
        assert_eq!(
            job_summary("j", &IngestionJob::pending(JobStatus::Processing)),
            "Job j: processing"
        );
    }
}
