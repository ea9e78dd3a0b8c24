use contracts::usecases::u602_upload_documents::{IngestionJob, UploadDocuments, UploadResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::api_utils::{api_url, js_error, read_json, ApiError, ErrorField};

/// Sends every file in one multipart form (`POST /api/ingest/documents`)
pub async fn upload_documents(api_base: &str, files: &[File]) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for file in files {
        form.append_with_blob_and_filename(UploadDocuments::FILES_FIELD, file, &file.name())
            .map_err(js_error)?;
    }

    log::debug!("POST /api/ingest/documents ({} files)", files.len());
    let response = Request::post(&api_url(api_base, "/api/ingest/documents"))
        .body(form)?
        .send()
        .await?;

    read_json(response, ErrorField::Error).await
}

/// Current state of an ingestion job (`GET /api/ingest/status/{job_id}`)
pub async fn get_job(api_base: &str, job_id: &str) -> Result<IngestionJob, ApiError> {
    let url = api_url(
        api_base,
        &format!("/api/ingest/status/{}", urlencoding::encode(job_id)),
    );

    let response = Request::get(&url).send().await?;

    read_json(response, ErrorField::Detail).await
}
