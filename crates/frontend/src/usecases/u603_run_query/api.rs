use contracts::usecases::u603_run_query::{HistoryEntry, HistoryResponse, QueryRequest, QueryResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, rejected, ApiError, ErrorField};

/// Runs a natural-language query (`POST /api/query`).
///
/// The backend reports query failures inside a 2xx body, so the body is
/// decoded whatever the status. A non-2xx answer without an `error` field
/// becomes `Rejected`, or `Transport` when its body is not JSON.
pub async fn run_query(api_base: &str, request: QueryRequest) -> Result<QueryResponse, ApiError> {
    log::debug!("POST /api/query");
    let response = Request::post(&api_url(api_base, "/api/query"))
        .json(&request)?
        .send()
        .await?;

    let ok = response.ok();
    let status = response.status();
    let text = response.text().await?;
    decode_query_response(ok, status, &text)
}

pub fn decode_query_response(ok: bool, status: u16, body: &str) -> Result<QueryResponse, ApiError> {
    match serde_json::from_str::<QueryResponse>(body) {
        Ok(resp) if ok || resp.error_message().is_some() => Ok(resp),
        Err(e) if ok => Err(ApiError::Transport(format!(
            "malformed query response: {}",
            e
        ))),
        _ => Err(rejected(status, body, ErrorField::Detail)),
    }
}

/// Previously run queries, oldest first (`GET /api/query/history`)
pub async fn get_history(api_base: &str) -> Result<Vec<HistoryEntry>, ApiError> {
    log::debug!("GET /api/query/history");
    let response = Request::get(&api_url(api_base, "/api/query/history"))
        .send()
        .await?;

    let body: HistoryResponse = read_json(response, ErrorField::Detail).await?;
    Ok(body.history)
}
