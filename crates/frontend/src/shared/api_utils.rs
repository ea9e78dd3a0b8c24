//! API utilities for frontend-backend communication
//!
//! Every call returns `Result<T, ApiError>`. A response that arrived with a
//! non-2xx status becomes `Rejected`; anything that kept us from getting a
//! usable answer (network failure, undecodable body) becomes `Transport`.

use contracts::usecases::common::ErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, message: Option<String> },
    /// No usable response was obtained
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Backend-provided message, or `fallback` when there is none
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Converts a failed JS call (e.g. building a `FormData`) into an `ApiError`
pub fn js_error(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// Build a full API URL from the backend origin and a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://127.0.0.1:8000/", "/api/query");
/// assert_eq!(url, "http://127.0.0.1:8000/api/query");
/// ```
pub fn api_url(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// Which error field of the backend's body carries the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    /// FastAPI `HTTPException` (`detail`)
    Detail,
    /// Ingestion routes (`error`, falling back to `detail`)
    Error,
}

impl ErrorField {
    pub fn pick(self, body: ErrorBody) -> Option<String> {
        match self {
            ErrorField::Detail => body.detail_first(),
            ErrorField::Error => body.error_first(),
        }
    }
}

/// Decodes a 2xx body as `T`; otherwise returns `Rejected` with the message
/// read from `field`.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    field: ErrorField,
) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await?;
        return Err(rejected(status, &text, field));
    }
    Ok(response.json::<T>().await?)
}

/// Error for a non-2xx answer. A body that is not a JSON error object is a
/// malformed response and counts as `Transport`.
pub fn rejected(status: u16, body: &str, field: ErrorField) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => ApiError::Rejected {
            status,
            message: field.pick(b),
        },
        Err(e) => ApiError::Transport(format!("malformed HTTP {} response: {}", status, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("http://127.0.0.1:8000/", "/api/query"),
            "http://127.0.0.1:8000/api/query"
        );
        assert_eq!(api_url("http://h:1", "/"), "http://h:1/");
    }

    #[test]
    fn test_rejected_reads_detail() {
        let err = rejected(400, r#"{"detail":"Failed to connect: bad host"}"#, ErrorField::Detail);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 400,
                message: Some("Failed to connect: bad host".into())
            }
        );
        assert_eq!(err.user_message("Could not connect"), "Failed to connect: bad host");
    }

    #[test]
    fn test_rejected_reads_error_field() {
        let err = rejected(500, r#"{"error":"disk full","detail":"x"}"#, ErrorField::Error);
        assert_eq!(err.user_message("Unknown error"), "disk full");
    }

    #[test]
    fn test_non_json_error_body_is_transport() {
        let err = rejected(502, "<html>Bad Gateway</html>", ErrorField::Detail);
        assert!(err.is_transport());
        assert_eq!(err.user_message("Could not connect"), "Could not connect");

        let err = rejected(500, "", ErrorField::Error);
        assert!(err.is_transport());
    }

    #[test]
    fn test_json_error_body_without_message() {
        let err = rejected(500, "{}", ErrorField::Detail);
        assert_eq!(err, ApiError::Rejected { status: 500, message: None });
    }

    #[test]
    fn test_transport_uses_fallback() {
        let err = ApiError::Transport("connection refused".into());
        assert!(err.is_transport());
        assert_eq!(err.user_message("fallback"), "fallback");
        assert_eq!(err.to_string(), "transport failure: connection refused");
    }
}
