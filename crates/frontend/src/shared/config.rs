//! Runtime configuration of the frontend
//!
//! The backend origin is resolved once at startup and handed to every
//! component through Leptos context.

use std::str::FromStr;

use leptos::prelude::*;

/// Port the backend listens on when the origin is derived from the page
pub const DEFAULT_API_PORT: u16 = 8000;

/// Origin used when nothing else is available (no window, no overrides)
pub const FALLBACK_API_BASE: &str = "http://127.0.0.1:8000";

/// `<meta name=...>` the host page can use to point at another backend
pub const API_BASE_META: &str = "query-engine-api-base";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash, e.g. "http://127.0.0.1:8000"
    pub api_base: String,
    pub log_level: log::Level,
}

impl AppConfig {
    /// Resolution order: build-time `QUERY_ENGINE_API_BASE`, the host page's
    /// meta tag, the page location on port 8000, then the fallback origin.
    pub fn from_environment() -> Self {
        Self {
            api_base: resolve_api_base(
                option_env!("QUERY_ENGINE_API_BASE"),
                meta_api_base(),
                page_location(),
            ),
            log_level: parse_log_level(option_env!("QUERY_ENGINE_LOG_LEVEL")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            log_level: log::Level::Debug,
        }
    }
}

/// Configuration provided by the root component.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_environment)
}

pub fn resolve_api_base(
    build_env: Option<&str>,
    meta: Option<String>,
    location: Option<(String, String)>,
) -> String {
    if let Some(base) = build_env.and_then(normalize) {
        return base;
    }
    if let Some(base) = meta.as_deref().and_then(normalize) {
        return base;
    }
    if let Some((protocol, hostname)) = location {
        if !hostname.is_empty() {
            return format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT);
        }
    }
    FALLBACK_API_BASE.to_string()
}

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| log::Level::from_str(s.trim()).ok())
        .unwrap_or(log::Level::Debug)
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

fn page_location() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().ok()?;
    Some((protocol, hostname))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(protocol: &str, host: &str) -> Option<(String, String)> {
        Some((protocol.to_string(), host.to_string()))
    }

    #[test]
    fn test_build_env_wins() {
        let base = resolve_api_base(
            Some("https://api.example.com/"),
            Some("http://meta:1".into()),
            loc("http:", "localhost"),
        );
        assert_eq!(base, "https://api.example.com");
    }

    #[test]
    fn test_meta_over_location() {
        let base = resolve_api_base(None, Some(" http://meta:9000 ".into()), loc("http:", "localhost"));
        assert_eq!(base, "http://meta:9000");
    }

    #[test]
    fn test_blank_overrides_are_skipped() {
        let base = resolve_api_base(Some("  "), Some(String::new()), loc("https:", "query.local"));
        assert_eq!(base, "https://query.local:8000");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(resolve_api_base(None, None, None), FALLBACK_API_BASE);
        assert_eq!(resolve_api_base(None, None, loc("http:", "")), FALLBACK_API_BASE);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("warn")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("INFO")), log::Level::Info);
        assert_eq!(parse_log_level(Some("verbose")), log::Level::Debug);
        assert_eq!(parse_log_level(None), log::Level::Debug);
    }
}
