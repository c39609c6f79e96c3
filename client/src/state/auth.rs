//! Auth-session state and the manager that drives it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `AuthSession` is the only writer: it owns
//! login/register/logout and keeps the persisted session in step with memory.
//!
//! DESIGN
//! ======
//! The manager writes through `AuthCell` rather than a concrete signal so the
//! same lifecycle code drives a Leptos `RwSignal` in the app and a plain
//! `Arc<Mutex<_>>` in tests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex};

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, RegistrationData, RegistrationForm, Session, UserProfile};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub phase: AuthPhase,
    /// True until the persisted session has been read, and while a
    /// login/register call is in flight.
    pub loading: bool,
    /// Last failure, rendered by the login/register forms.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, phase: AuthPhase::Unauthenticated, loading: true, error: None }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    fn settled_phase(&self) -> AuthPhase {
        if self.session.is_some() { AuthPhase::Authenticated } else { AuthPhase::Unauthenticated }
    }
}

/// Where the manager reads and writes `AuthState`.
pub trait AuthCell: Clone {
    fn snapshot(&self) -> AuthState;
    fn modify(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthCell for leptos::prelude::RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        leptos::prelude::GetUntracked::get_untracked(self)
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        leptos::prelude::Update::update(self, f);
    }
}

impl AuthCell for Arc<Mutex<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn modify(&self, f: impl FnOnce(&mut AuthState)) {
        if let Ok(mut state) = self.lock() {
            f(&mut state);
        }
    }
}

/// Check registration input locally and strip the confirmation field.
///
/// # Errors
///
/// `ApiError::Validation` with the message shown under the form.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegistrationData, ApiError> {
    if form.username.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
        return Err(ApiError::Validation("Please fill in all fields".to_owned()));
    }
    if form.password != form.confirm_password {
        return Err(ApiError::Validation("Passwords do not match".to_owned()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(RegistrationData::from(form))
}

/// The manager as provided through Leptos context.
pub type AppAuth = AuthSession<leptos::prelude::RwSignal<AuthState>>;

/// Login/register/logout orchestration over one `ApiClient`.
#[derive(Clone)]
pub struct AuthSession<C: AuthCell> {
    api: ApiClient,
    state: C,
}

impl<C: AuthCell> AuthSession<C> {
    pub fn new(api: ApiClient, state: C) -> Self {
        Self { api, state }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.snapshot().is_authenticated()
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.state.snapshot().session.map(|s| s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.snapshot().session.map(|s| s.token)
    }

    /// Restore the persisted session, then leave the loading state.
    pub fn hydrate(&self) {
        let restored = self.api.store().load();
        if restored.is_some() {
            log::debug!("restored persisted session");
        }
        self.state.modify(|s| {
            s.session = restored;
            s.phase = s.settled_phase();
            s.loading = false;
        });
    }

    /// Sign in and persist the session on success.
    ///
    /// Input is forwarded as-is; empty fields come back as whatever the
    /// backend answers.
    ///
    /// # Errors
    ///
    /// The `ApiError` from the backend call, also retained in state.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.begin();
        let result = self.api.login(credentials).await;
        self.finish(result)
    }

    /// Validate locally, then register and persist the session on success.
    ///
    /// # Errors
    ///
    /// `Validation` without any network call, or the backend `ApiError`.
    pub async fn register(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        let data = match validate_registration(form) {
            Ok(data) => data,
            Err(e) => {
                self.state.modify(|s| s.error = Some(e.user_message()));
                return Err(e);
            }
        };
        self.begin();
        let result = self.api.register(&data).await;
        self.finish(result)
    }

    /// Drop the session locally. The backend keeps no session to invalidate.
    pub fn logout(&self) {
        self.api.store().clear();
        self.state.modify(|s| {
            s.session = None;
            s.error = None;
            s.phase = AuthPhase::Unauthenticated;
            s.loading = false;
        });
    }

    pub fn clear_error(&self) {
        self.state.modify(|s| s.error = None);
    }

    fn begin(&self) {
        self.state.modify(|s| {
            s.error = None;
            s.loading = true;
            s.phase = AuthPhase::Authenticating;
        });
    }

    fn finish(&self, result: Result<Session, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(session) => {
                self.api.store().save(&session.token, &session.user);
                log::info!("signed in as {}", session.user.email);
                self.state.modify(|s| {
                    s.session = Some(session);
                    s.phase = AuthPhase::Authenticated;
                    s.loading = false;
                    s.error = None;
                });
                Ok(())
            }
            Err(e) => {
                log::warn!("authentication failed: {e}");
                let message = e.user_message();
                self.state.modify(|s| {
                    s.phase = s.settled_phase();
                    s.loading = false;
                    s.error = Some(message);
                });
                Err(e)
            }
        }
    }
}
