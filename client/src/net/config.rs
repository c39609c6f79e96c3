//! Backend client configuration.
//!
//! The backend base URL is baked in at build time from `SKILLNEST_API_URL`
//! (WASM bundles have no process environment at run time).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend root without a trailing slash, e.g. `https://api.example.com/api/v1`.
    pub base_url: String,
    pub timeout: Duration,
    /// Send cookies on cross-origin requests.
    pub include_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build config from the compile-time environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_base_url(option_env!("SKILLNEST_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    #[must_use]
    pub fn from_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self {
            base_url: base_url.to_owned(),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            include_credentials: true,
        }
    }

    /// Join an API path (with or without a leading slash) onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
