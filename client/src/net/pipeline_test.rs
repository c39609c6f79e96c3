use std::sync::Arc;

use super::*;
use crate::net::types::UserProfile;
use crate::test_support::RecordingNavigator;
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn ctx(path: &str, view: &str) -> RequestContext {
    RequestContext::new(path, view.to_owned())
}

fn response(status: u16, body: serde_json::Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse { status, body: body.to_string() })
}

fn seeded_store() -> SessionStore {
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    store.save(
        "tok123",
        &UserProfile {
            id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            first_name: "alice".to_owned(),
            last_name: String::new(),
            role: "user".to_owned(),
        },
    );
    store
}

// =============================================================
// build_request / attach_auth
// =============================================================

#[test]
fn build_request_sets_defaults_from_config() {
    let config = ApiConfig::from_base_url("https://api.test/v1");
    let req = build_request(&config, HttpMethod::Post, "/users/login", Some("{}".to_owned()));
    assert_eq!(req.url, "https://api.test/v1/users/login");
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.timeout, Duration::from_millis(10_000));
    assert!(req.include_credentials);
    assert_eq!(req.body.as_deref(), Some("{}"));
}

#[test]
fn attach_auth_adds_bearer_header() {
    let req = build_request(&ApiConfig::default(), HttpMethod::Get, "/enrollments", None);
    let req = attach_auth(req, Some("tok123"));
    assert_eq!(req.header(AUTHORIZATION_HEADER), Some("Bearer tok123"));
}

#[test]
fn attach_auth_without_token_leaves_headers_untouched() {
    let req = build_request(&ApiConfig::default(), HttpMethod::Get, "/courses", None);
    let before = req.headers.clone();
    assert_eq!(attach_auth(req.clone(), None).headers, before);
    assert_eq!(attach_auth(req, Some("")).headers, before);
}

#[test]
fn attach_auth_replaces_existing_authorization() {
    let req = build_request(&ApiConfig::default(), HttpMethod::Get, "/courses", None);
    let req = attach_auth(attach_auth(req, Some("old")), Some("new"));
    let auth_headers = req
        .headers
        .iter()
        .filter(|(k, _)| k == AUTHORIZATION_HEADER)
        .count();
    assert_eq!(auth_headers, 1);
    assert_eq!(req.header(AUTHORIZATION_HEADER), Some("Bearer new"));
}

// =============================================================
// RequestContext
// =============================================================

#[test]
fn request_context_detects_login_requests_and_view() {
    assert!(ctx("/users/login", "/courses").exempt_from_session_expiry());
    assert!(ctx("/enrollments", "/login").exempt_from_session_expiry());
    assert!(!ctx("/enrollments", "/dashboard").exempt_from_session_expiry());
    assert!(!ctx("/users/register", "/register").is_login_request);
}

// =============================================================
// classify_response
// =============================================================

#[test]
fn classify_passes_success_through() {
    let result = classify_response(&ctx("/courses", "/courses"), response(200, serde_json::json!({"success": true})));
    assert_eq!(result.unwrap().status, 200);
}

#[test]
fn classify_transport_failure_is_network_error() {
    let result = classify_response(
        &ctx("/courses", "/courses"),
        Err(TransportError::Timeout(Duration::from_millis(10_000))),
    );
    assert_eq!(result, Err(ApiError::Network));
}

#[test]
fn classify_401_outside_login_is_session_expired() {
    let result = classify_response(&ctx("/enrollments", "/dashboard"), response(401, serde_json::json!({})));
    assert_eq!(result, Err(ApiError::SessionExpired));
}

#[test]
fn classify_401_on_login_request_surfaces_server_message() {
    let result = classify_response(
        &ctx("/users/login", "/login"),
        response(401, serde_json::json!({"message": "Invalid credentials"})),
    );
    assert_eq!(
        result,
        Err(ApiError::Http { status: 401, message: "Invalid credentials".to_owned() })
    );
}

#[test]
fn classify_401_on_login_view_is_plain_http_error() {
    let result = classify_response(&ctx("/courses", "/login"), response(401, serde_json::json!({})));
    assert_eq!(result, Err(ApiError::http(401, None)));
}

#[test]
fn classify_other_statuses_preserve_code() {
    for status in [403_u16, 404, 500, 502, 422] {
        let result = classify_response(&ctx("/courses", "/courses"), response(status, serde_json::json!({})));
        assert_eq!(result.unwrap_err().status(), Some(status));
    }
}

#[test]
fn classify_non_json_error_body_uses_fallback() {
    let result = classify_response(
        &ctx("/courses", "/courses"),
        Ok(HttpResponse { status: 502, body: "<html>Bad Gateway</html>".to_owned() }),
    );
    assert_eq!(result, Err(ApiError::http(502, None)));
}

// =============================================================
// handle_session_expiry
// =============================================================

#[test]
fn session_expiry_clears_store_and_redirects_once() {
    let store = seeded_store();
    let navigator = RecordingNavigator::at("/dashboard");

    let result: Result<(), ApiError> = handle_session_expiry(Err(ApiError::SessionExpired), &store, &navigator);

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert!(store.load().is_none());
    assert_eq!(navigator.redirects(), vec![LOGIN_ROUTE.to_owned()]);
}

#[test]
fn other_errors_leave_session_alone() {
    let store = seeded_store();
    let navigator = RecordingNavigator::at("/dashboard");

    let result: Result<(), ApiError> = handle_session_expiry(Err(ApiError::http(403, None)), &store, &navigator);

    assert_eq!(result.unwrap_err().status(), Some(403));
    assert!(store.load().is_some());
    assert!(navigator.redirects().is_empty());
}

#[test]
fn server_message_reads_message_field_only() {
    assert_eq!(server_message(r#"{"message":"nope"}"#).as_deref(), Some("nope"));
    assert_eq!(server_message(r#"{"error":"nope"}"#), None);
    assert_eq!(server_message("plain text"), None);
}
