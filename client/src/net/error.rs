//! Error taxonomy for every backend call.
//!
//! ERROR HANDLING
//! ==============
//! Pages never see transport or serde errors directly. Everything is folded
//! into `ApiError` so a failed call always leaves the initiating component
//! with a message to render and a retry decision.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";
pub const ENCODE_ERROR_MESSAGE: &str = "Something went wrong while preparing the request";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Local, pre-network input rejection.
    #[error("{0}")]
    Validation(String),

    /// No response reached the client (offline, DNS, CORS, timeout).
    #[error("Network error - please check your connection")]
    Network,

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A 401 outside the login flow; the session was cleared and the browser
    /// sent to `/login`.
    #[error("session expired")]
    SessionExpired,

    /// A success status whose body did not match the expected envelope.
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// The request body could not be serialized; nothing was sent.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an HTTP error, falling back to a per-status message when the
    /// backend sent none.
    #[must_use]
    pub fn http(status: u16, server_message: Option<String>) -> Self {
        let message = server_message
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback_message(status).to_owned());
        Self::Http { status, message }
    }

    /// Text suitable for inline display next to a form or list.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Http { message, .. } => message.clone(),
            Self::Network => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::SessionExpired => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::InvalidResponse(_) => INVALID_RESPONSE_MESSAGE.to_owned(),
            Self::Encode(_) => ENCODE_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Message for an inline error box, or `None` when the session expired:
    /// the pipeline is already reloading `/login`, so there is nothing to show.
    #[must_use]
    pub fn inline_message(&self) -> Option<String> {
        match self {
            Self::SessionExpired => None,
            other => Some(other.user_message()),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether offering "Try again" makes sense.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network | Self::Http { status: 500..=599, .. })
    }
}

/// Generic message per status family when the backend body has none.
#[must_use]
pub fn fallback_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Invalid email or password",
        403 => "Access forbidden",
        404 => "Resource not found",
        500..=599 => "Server error occurred",
        _ => "Something went wrong",
    }
}
