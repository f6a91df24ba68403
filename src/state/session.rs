//! Session state for the signed-in console operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for "who is logged in". The navigation guard
//! reads it, the request gateway reads the token from it and clears it on
//! 401, and the login/profile pages write it.
//!
//! DESIGN
//! ======
//! `SessionState` holds the semantics as plain methods so they test without
//! a reactive runtime. `SessionStore` wraps it in an `RwSignal` for views and
//! mirrors every mutation into a `SessionStorage` backend. Rehydration is an
//! explicit `restore` step with a versioned snapshot schema.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User, UserPatch};
use crate::util::storage;

/// Version tag written into every persisted snapshot.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// In-memory session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: String,
    pub user: Option<User>,
    /// Set once the durable snapshot has been read. Not persisted.
    pub restored: bool,
}

impl SessionState {
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Merge `patch` into the current profile. No-op without a profile.
    pub fn update_user_partial(&mut self, patch: &UserPatch) {
        if let Some(user) = self.user.as_mut() {
            patch.apply_to(user);
        }
    }

    /// Reset token and profile together. `restored` is kept.
    pub fn logout(&mut self) {
        self.token.clear();
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty() && self.user.as_ref().is_some_and(|u| u.id > 0)
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            version: SESSION_SCHEMA_VERSION,
            token: self.token.clone(),
            user: self.user.clone(),
        }
    }

    /// Rebuild from a raw snapshot. Missing, unreadable or foreign-version
    /// snapshots yield the empty session.
    pub fn from_snapshot(raw: Option<&str>) -> Self {
        let mut state = Self { restored: true, ..Self::default() };
        let Some(raw) = raw else {
            return state;
        };
        match serde_json::from_str::<PersistedSession>(raw) {
            Ok(snapshot) if snapshot.version == SESSION_SCHEMA_VERSION => {
                state.token = snapshot.token;
                state.user = snapshot.user;
            }
            Ok(snapshot) => {
                leptos::logging::warn!(
                    "discarding session snapshot with schema version {}",
                    snapshot.version
                );
            }
            Err(e) => {
                leptos::logging::warn!("discarding unreadable session snapshot: {e}");
            }
        }
        state
    }
}

/// Durable snapshot layout stored under the session key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub version: u32,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Durable key-value slot holding the session snapshot.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
}

/// Browser `localStorage` slot.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        storage::load_raw(&self.key)
    }

    fn save(&self, raw: &str) {
        storage::save_raw(&self.key, raw);
    }
}

/// Process-local slot used during server rendering and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(raw.into())) }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.raw()
    }

    fn save(&self, raw: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(raw.to_owned());
        }
    }
}

/// Observable session container shared through Leptos context.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Empty, not-yet-restored session backed by `storage`.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), storage }
    }

    /// Read the durable snapshot into the live state.
    pub fn restore(&self) {
        let restored = SessionState::from_snapshot(self.storage.load().as_deref());
        self.state.set(restored);
    }

    /// Tracked read for views and effects.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn state_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn token(&self) -> String {
        self.state.with_untracked(|s| s.token.clone())
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.mutate(|s| s.set_token(token));
    }

    pub fn set_user(&self, user: User) {
        self.mutate(|s| s.set_user(user));
    }

    pub fn update_user_partial(&self, patch: &UserPatch) {
        self.mutate(|s| s.update_user_partial(patch));
    }

    pub fn logout(&self) {
        self.mutate(SessionState::logout);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    fn mutate(&self, f: impl FnOnce(&mut SessionState)) {
        self.state.update(f);
        let snapshot = self.state.with_untracked(SessionState::snapshot);
        match serde_json::to_string(&snapshot) {
            Ok(raw) => self.storage.save(&raw),
            Err(e) => leptos::logging::warn!("session snapshot encode failed: {e}"),
        }
    }
}
