use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on non-2xx responses.
///
/// FastAPI reports failures through `detail`; the ingestion routes use
/// `error`. Both are optional and either may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// `detail` first, then `error`. Blank strings count as absent.
    pub fn detail_first(self) -> Option<String> {
        non_blank(self.detail).or_else(|| non_blank(self.error))
    }

    /// `error` first, then `detail`. Blank strings count as absent.
    pub fn error_first(self) -> Option<String> {
        non_blank(self.error).or_else(|| non_blank(self.detail))
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_first() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Failed to connect: timeout"}"#).unwrap();
        assert_eq!(body.detail_first().as_deref(), Some("Failed to connect: timeout"));
    }

    #[test]
    fn test_error_first_falls_back_to_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Field required"}"#).unwrap();
        assert_eq!(body.clone().error_first().as_deref(), Some("Field required"));

        let both = ErrorBody {
            detail: Some("d".into()),
            error: Some("e".into()),
        };
        assert_eq!(both.error_first().as_deref(), Some("e"));
    }

    #[test]
    fn test_blank_messages_are_absent() {
        let body = ErrorBody {
            detail: Some("  ".into()),
            error: None,
        };
        assert_eq!(body.detail_first(), None);
    }
}
