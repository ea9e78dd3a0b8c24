use contracts::system::HealthResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, ApiError, ErrorField};

/// Backend liveness probe (`GET /`)
pub async fn ping(api_base: &str) -> Result<HealthResponse, ApiError> {
    let response = Request::get(&api_url(api_base, "/")).send().await?;

    read_json(response, ErrorField::Detail).await
}
