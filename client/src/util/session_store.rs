//! Persistent session store: bearer token + serialized user profile.
//!
//! Both keys are always written and cleared together. A session with only one
//! key present, or with a user record that no longer parses, loads as absent.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use super::storage::{KeyValueStorage, load_json, save_json};
use crate::net::types::{Session, UserProfile};

pub const TOKEN_KEY: &str = "skillnest_token";
pub const USER_KEY: &str = "skillnest_user";

/// Cheap-to-clone handle over the shared storage backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn save(&self, token: &str, user: &UserProfile) {
        self.storage.set_item(TOKEN_KEY, token);
        save_json(self.storage.as_ref(), USER_KEY, user);
    }

    /// Load the persisted session, failing closed on any partial state.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let user = load_json::<UserProfile>(self.storage.as_ref(), USER_KEY)?;
        Some(Session { token, user })
    }

    /// The stored bearer token, if any. Read on every outgoing request.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }
}
