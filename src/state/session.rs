//! Persisted session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is created once by the root component, restored from storage,
//! and provided through Leptos context as an `RwSignal`. Pages read it to
//! render identity-dependent content; only [`SessionStore::login`] and
//! [`SessionStore::logout`] write it, and every write is persisted.
//!
//! The `admin` flag is whatever the caller of `login` said it was. It drives
//! what the UI shows and is not an authorization check.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStorage, load_json, save_json};

/// Storage key for the session store, matching the store's name.
pub const SESSION_STORE_KEY: &str = "user";

/// Identity and privilege flag of the current user.
///
/// Missing fields in a persisted payload fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// Empty when logged out.
    pub username: String,
    pub admin: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        !self.username.is_empty()
    }
}

/// Session state bound to the storage it persists into.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    key: String,
    state: SessionState,
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Build a store from whatever is persisted under `key`.
    ///
    /// A missing entry yields defaults. An unreadable or corrupt entry also
    /// yields defaults and is logged; it gets overwritten on the next write.
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match load_json::<SessionState>(&storage, &key) {
            Ok(Some(state)) => {
                log::debug!("restored session for {:?} from {key}", state.username);
                state
            }
            Ok(None) => SessionState::default(),
            Err(err) => {
                log::warn!("discarding persisted session: {err}");
                SessionState::default()
            }
        };
        Self { key, state, storage }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn username(&self) -> &str {
        &self.state.username
    }

    pub fn is_admin(&self) -> bool {
        self.state.admin
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    /// Replace both fields with the caller's values. No validation.
    pub fn login(&mut self, username: impl Into<String>, admin: bool) {
        self.state = SessionState { username: username.into(), admin };
        log::info!("login as {:?} (admin: {admin})", self.state.username);
        self.persist();
    }

    /// Reset both fields to their defaults.
    pub fn logout(&mut self) {
        log::info!("logout {:?}", self.state.username);
        self.state = SessionState::default();
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = save_json(&self.storage, &self.key, &self.state) {
            log::warn!("failed to persist session under {}: {err}", self.key);
        }
    }
}
