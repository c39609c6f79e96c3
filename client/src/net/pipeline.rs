//! Request/response pipeline stages.
//!
//! DESIGN
//! ======
//! Every backend call runs the same fixed sequence:
//!
//! ```text
//! build_request -> attach_auth -> Transport::send -> classify_response -> handle_session_expiry
//! ```
//!
//! Each stage is a plain function over values so ordering is visible at the
//! single call site in `ApiClient::execute` and every stage is unit-testable
//! without a browser.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::time::Duration;

use super::config::{ApiConfig, JSON_CONTENT_TYPE};
use super::error::ApiError;
use crate::util::navigation::{LOGIN_ROUTE, Navigator};
use crate::util::session_store::SessionStore;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// Fully-resolved outgoing request handed to a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
    pub include_credentials: bool,
}

impl HttpRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status plus undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("request failed: {0}")]
    Failed(String),
}

/// Per-request facts the response stages need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// API path as passed by the caller, e.g. `/users/login`.
    pub path: String,
    pub is_login_request: bool,
    /// Browser pathname when the response arrived.
    pub current_view: String,
}

impl RequestContext {
    #[must_use]
    pub fn new(path: &str, current_view: String) -> Self {
        Self {
            path: path.to_owned(),
            is_login_request: path.contains("/login"),
            current_view,
        }
    }

    /// A 401 here means "bad credentials", not "session died".
    #[must_use]
    pub fn exempt_from_session_expiry(&self) -> bool {
        self.is_login_request || self.current_view == LOGIN_ROUTE
    }
}

/// Stage 1: resolve URL, default headers and transport options.
#[must_use]
pub fn build_request(config: &ApiConfig, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
    HttpRequest {
        method,
        url: config.url_for(path),
        headers: vec![(CONTENT_TYPE_HEADER.to_owned(), JSON_CONTENT_TYPE.to_owned())],
        body,
        timeout: config.timeout,
        include_credentials: config.include_credentials,
    }
}

/// Stage 2: add `Authorization: Bearer <token>` when a token is available.
#[must_use]
pub fn attach_auth(mut request: HttpRequest, token: Option<&str>) -> HttpRequest {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        request.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
        request
            .headers
            .push((AUTHORIZATION_HEADER.to_owned(), format!("Bearer {token}")));
    }
    request
}

/// Stage 4: map the transport outcome onto the error taxonomy.
///
/// # Errors
///
/// `Network` when no response arrived, `SessionExpired` for a 401 outside the
/// login flow, `Http` for every other non-2xx status.
pub fn classify_response(
    ctx: &RequestContext,
    outcome: Result<HttpResponse, TransportError>,
) -> Result<HttpResponse, ApiError> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            log::error!("no response from server for {}: {e}", ctx.path);
            return Err(ApiError::Network);
        }
    };
    if response.is_success() {
        return Ok(response);
    }

    let server_message = server_message(&response.body);
    match response.status {
        401 if ctx.exempt_from_session_expiry() => {
            log::warn!("login failed: {}", server_message.as_deref().unwrap_or("unauthorized"));
        }
        401 => {
            log::warn!("unauthorized access on {}; ending session", ctx.path);
            return Err(ApiError::SessionExpired);
        }
        403 => log::warn!("access forbidden: {}", ctx.path),
        404 => log::warn!("resource not found: {}", ctx.path),
        500..=599 => log::error!("server error {} on {}", response.status, ctx.path),
        status => log::warn!(
            "request to {} failed with {status}: {}",
            ctx.path,
            server_message.as_deref().unwrap_or("unknown error")
        ),
    }
    Err(ApiError::http(response.status, server_message))
}

/// Stage 5: on `SessionExpired`, clear persisted auth and hard-navigate to
/// the login route before handing the error back to the caller.
///
/// # Errors
///
/// Passes `result` through unchanged.
pub fn handle_session_expiry<T>(
    result: Result<T, ApiError>,
    store: &SessionStore,
    navigator: &dyn Navigator,
) -> Result<T, ApiError> {
    if matches!(result, Err(ApiError::SessionExpired)) {
        store.clear();
        navigator.hard_redirect(LOGIN_ROUTE);
    }
    result
}

/// Extract `message` from a JSON error body, if there is one.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
