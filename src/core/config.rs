//! Application configuration.
//!
//! The server loads it with `Config::from_env()` after calling
//! `dotenvy::dotenv()` and writes the API origin into the page shell; the
//! browser reads it back with [`client_api_base_url`].

/// Backend origin used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default `tracing` filter for the server
pub const DEFAULT_LOG_FILTER: &str = "info,taskboard=debug";

/// `<meta name=...>` carrying the API origin from server to browser
pub const API_BASE_META: &str = "taskboard-api-base";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Single backend origin for every API call
    /// Example: https://api.example.com
    pub api_base_url: Option<String>,

    /// `tracing` filter directives (`RUST_LOG`)
    /// Example: info,taskboard=trace
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base_url: non_empty(std::env::var("API_BASE_URL").ok()),
            log_filter: non_empty(std::env::var("RUST_LOG").ok()),
        }
    }

    /// Check if an API origin is configured
    pub fn has_api_base_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Configured API origin without trailing slashes, or the default
    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// First non-blank candidate: the shell's meta tag, then the build-time
/// value, then [`DEFAULT_API_BASE_URL`].
pub fn resolve_api_base_url(from_page: Option<&str>, from_build: Option<&str>) -> String {
    [from_page, from_build]
        .into_iter()
        .flatten()
        .map(normalize_base_url)
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// API origin as seen from the browser
pub fn client_api_base_url() -> String {
    resolve_api_base_url(page_api_base().as_deref(), option_env!("TASKBOARD_API_URL"))
}

#[cfg(feature = "hydrate")]
fn page_api_base() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    web_sys::window()?
        .document()?
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

#[cfg(not(feature = "hydrate"))]
fn page_api_base() -> Option<String> {
    None
}
