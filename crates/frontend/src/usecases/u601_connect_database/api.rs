use contracts::usecases::u601_connect_database::{ConnectRequest, ConnectResponse};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::{api_url, js_error, read_json, ApiError, ErrorField};

/// Tests the connection and discovers the schema (`POST /api/ingest/database`)
pub async fn connect_database(
    api_base: &str,
    request: ConnectRequest,
) -> Result<ConnectResponse, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_str(
        ConnectRequest::CONNECTION_STRING_FIELD,
        &request.connection_string,
    )
    .map_err(js_error)?;

    log::debug!("POST /api/ingest/database");
    let response = Request::post(&api_url(api_base, "/api/ingest/database"))
        .body(form)?
        .send()
        .await?;

    read_json(response, ErrorField::Detail).await
}
