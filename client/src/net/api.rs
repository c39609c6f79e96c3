//! REST client for the course backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` is the single entry point for backend calls. It owns the
//! transport, the session store (for bearer tokens) and the navigator (for
//! forced logout), and runs every call through the stages in `pipeline`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. Envelope unwrapping happens
//! here so callers receive plain domain values.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;
use super::pipeline::{
    HttpMethod, HttpResponse, RequestContext, attach_auth, build_request, classify_response, handle_session_expiry,
};
use super::transport::Transport;
use super::types::{
    AuthPayload, Course, CourseFilters, Credentials, Enrollment, Envelope, ListPayload, RegistrationData, Session,
};
use crate::util::navigation::Navigator;
use crate::util::session_store::SessionStore;

pub const LOGIN_ENDPOINT: &str = "/users/login";
pub const REGISTER_ENDPOINT: &str = "/users/register";
pub const COURSES_ENDPOINT: &str = "/courses";
pub const ENROLLMENTS_ENDPOINT: &str = "/enrollments";

/// `GET /courses` path with only the non-empty filters, in a stable order.
#[must_use]
pub fn courses_endpoint(filters: &CourseFilters) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in [("search", &filters.search), ("category", &filters.category), ("level", &filters.level)] {
        if !value.is_empty() {
            query.append_pair(key, value);
        }
    }
    for (key, value) in [("page", filters.page), ("limit", filters.limit)] {
        if let Some(value) = value.filter(|v| *v > 0) {
            query.append_pair(key, &value.to_string());
        }
    }
    format!("{COURSES_ENDPOINT}?{}", query.finish())
}

#[must_use]
pub fn course_endpoint(course_id: &str) -> String {
    format!("{COURSES_ENDPOINT}/{course_id}")
}

#[must_use]
pub fn enrollment_endpoint(course_id: &str) -> String {
    format!("{ENROLLMENTS_ENDPOINT}/{course_id}")
}

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        store: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { config, transport, store, navigator }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Run one request through the full pipeline.
    ///
    /// # Errors
    ///
    /// See [`classify_response`]; a `SessionExpired` result has already
    /// cleared the store and redirected by the time it is returned.
    pub async fn execute(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let request = build_request(&self.config, method, path, body);
        let request = attach_auth(request, self.store.token().as_deref());
        let outcome = self.transport.send(&request).await;
        // The view may have changed while the request was in flight.
        let ctx = RequestContext::new(path, self.navigator.current_path());
        let result = classify_response(&ctx, outcome);
        handle_session_expiry(result, &self.store, self.navigator.as_ref())
    }

    /// `POST /users/login`.
    ///
    /// # Errors
    ///
    /// Any pipeline error, or `InvalidResponse` when the envelope lacks a
    /// token or user.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let response = self
            .execute(HttpMethod::Post, LOGIN_ENDPOINT, Some(encode_body(credentials)?))
            .await?;
        into_session(decode_data::<AuthPayload>(&response)?)
    }

    /// `POST /users/register`. Takes the wire type, so a confirmation field
    /// cannot be sent.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::login`].
    pub async fn register(&self, data: &RegistrationData) -> Result<Session, ApiError> {
        let response = self
            .execute(HttpMethod::Post, REGISTER_ENDPOINT, Some(encode_body(data)?))
            .await?;
        into_session(decode_data::<AuthPayload>(&response)?)
    }

    /// `GET /courses` with filters.
    ///
    /// # Errors
    ///
    /// Any pipeline or decode error.
    pub async fn get_courses(&self, filters: &CourseFilters) -> Result<Vec<Course>, ApiError> {
        let response = self.execute(HttpMethod::Get, &courses_endpoint(filters), None).await?;
        Ok(decode_data::<ListPayload<Course>>(&response)?.into_items())
    }

    /// `GET /courses/:id`.
    ///
    /// # Errors
    ///
    /// Any pipeline or decode error.
    pub async fn get_course_by_id(&self, course_id: &str) -> Result<Course, ApiError> {
        let response = self.execute(HttpMethod::Get, &course_endpoint(course_id), None).await?;
        decode_data(&response)
    }

    /// `GET /enrollments` for the signed-in user.
    ///
    /// # Errors
    ///
    /// Any pipeline or decode error.
    pub async fn get_user_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        let response = self.execute(HttpMethod::Get, ENROLLMENTS_ENDPOINT, None).await?;
        Ok(decode_data::<ListPayload<Enrollment>>(&response)?.into_items())
    }

    /// `POST /enrollments/:courseId`.
    ///
    /// # Errors
    ///
    /// Any pipeline or decode error.
    pub async fn enroll_in_course(&self, course_id: &str) -> Result<Enrollment, ApiError> {
        let response = self
            .execute(HttpMethod::Post, &enrollment_endpoint(course_id), None)
            .await?;
        decode_data(&response)
    }

    /// `DELETE /enrollments/:courseId`. The backend sends no data payload.
    ///
    /// # Errors
    ///
    /// Any pipeline error, or `InvalidResponse` when the body reports
    /// `success: false`.
    pub async fn unenroll_from_course(&self, course_id: &str) -> Result<(), ApiError> {
        let response = self
            .execute(HttpMethod::Delete, &enrollment_endpoint(course_id), None)
            .await?;
        if response.body.trim().is_empty() {
            return Ok(());
        }
        let envelope = decode_envelope::<serde_json::Value>(&response)?;
        check_success(&envelope)
    }
}

fn encode_body<T: Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| {
        log::error!("request body did not serialize: {e}");
        ApiError::Encode(e.to_string())
    })
}

fn decode_envelope<T: DeserializeOwned>(response: &HttpResponse) -> Result<Envelope<T>, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::warn!("unexpected response body: {e}");
        ApiError::InvalidResponse(e.to_string())
    })
}

fn check_success<T>(envelope: &Envelope<T>) -> Result<(), ApiError> {
    if envelope.success == Some(false) {
        return Err(ApiError::InvalidResponse(
            envelope
                .message
                .clone()
                .unwrap_or_else(|| "request was not successful".to_owned()),
        ));
    }
    Ok(())
}

fn decode_data<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let envelope = decode_envelope::<T>(response)?;
    check_success(&envelope)?;
    envelope
        .data
        .ok_or_else(|| ApiError::InvalidResponse("missing data".to_owned()))
}

fn into_session(payload: AuthPayload) -> Result<Session, ApiError> {
    payload.into_session().ok_or_else(|| {
        log::error!("auth response is missing token or user");
        ApiError::InvalidResponse("missing token or user".to_owned())
    })
}
