//! Session store: the single writer of [`AuthState`].
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is a plain owned state machine (Restoring -> Anonymous |
//! Authenticated, then Anonymous <-> Authenticated) that keeps the in-memory
//! identity and the persisted record in sync. `Session` wraps it in a signal
//! so components can read reactively while all mutation stays in one place.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures and corrupt records are logged and normalized to "no
//! identity". Callers only ever see `bool` from `login`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::auth::{AuthState, Identity, SessionPhase};
use crate::util::storage::KeyValueStorage;

/// `localStorage` key holding the serialized [`Identity`].
pub const SESSION_STORAGE_KEY: &str = "warehouse_session_user";

const DEMO_USERNAME: &str = "admin";
const DEMO_CREDENTIAL: &str = "admin123";
const EMAIL_DOMAIN: &str = "warehouse.local";

/// Decides whether a username/credential pair may sign in.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, credential: &str) -> bool;
}

/// Exact-match check against one fixed username/credential pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedCredentials {
    username: String,
    credential: String,
}

impl FixedCredentials {
    pub fn new(username: impl Into<String>, credential: impl Into<String>) -> Self {
        Self { username: username.into(), credential: credential.into() }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_CREDENTIAL)
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, credential: &str) -> bool {
        username == self.username && credential == self.credential
    }
}

/// Owned session state plus its persistence and verification collaborators.
pub struct SessionStore {
    state: AuthState,
    storage: Arc<dyn KeyValueStorage>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionStore {
    /// Create a store in the `Restoring` phase.
    pub fn new(storage: Arc<dyn KeyValueStorage>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { state: AuthState::default(), storage, verifier }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Load the persisted identity, if any, and leave the `Restoring` phase.
    ///
    /// Runs once; later calls are no-ops so `restoring` never flips back.
    pub fn restore(&mut self) {
        if !self.state.restoring {
            return;
        }
        self.state.user = self.read_persisted();
        self.state.restoring = false;
        log::debug!("session restored: {:?}", self.state.phase());
    }

    fn read_persisted(&self) -> Option<Identity> {
        let raw = match self.storage.read(SESSION_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("session restore: read failed: {e}");
                return None;
            }
        };
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::warn!("session restore: discarding corrupt record: {e}");
                if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
                    log::warn!("session restore: remove failed: {e}");
                }
                None
            }
        }
    }

    /// Verify credentials and, on success, issue and persist a new identity.
    ///
    /// A rejected attempt leaves the current state untouched. A successful one
    /// also ends the restoring phase.
    pub fn login(&mut self, username: &str, credential: &str) -> bool {
        if !self.verifier.verify(username, credential) {
            log::info!("login rejected for {username:?}");
            return false;
        }
        let identity = issue_identity(username);
        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(e) = self.storage.write(SESSION_STORAGE_KEY, &raw) {
                    log::warn!("login: persisting session failed: {e}");
                }
            }
            Err(e) => log::warn!("login: serializing session failed: {e}"),
        }
        self.state.user = Some(identity);
        self.state.restoring = false;
        true
    }

    /// Clear the identity and its persisted record. Safe to repeat.
    ///
    /// Always lands in `Anonymous`, including when called before `restore`.
    pub fn logout(&mut self) {
        self.state.user = None;
        self.state.restoring = false;
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            log::warn!("logout: removing session failed: {e}");
        }
    }
}

fn issue_identity(username: &str) -> Identity {
    Identity {
        id: uuid::Uuid::new_v4().to_string(),
        name: username.to_owned(),
        email: format!("{username}@{EMAIL_DOMAIN}"),
    }
}

/// Reactive handle over the session store, provided via context.
///
/// Copyable; every clone refers to the same store.
#[derive(Clone, Copy)]
pub struct Session {
    store: RwSignal<SessionStore>,
}

impl Session {
    pub fn new(store: SessionStore) -> Self {
        Self { store: RwSignal::new(store) }
    }

    /// Snapshot of the current state, tracked by the calling reactive scope.
    pub fn state(&self) -> AuthState {
        self.store.with(|s| s.state().clone())
    }

    pub fn restore(&self) {
        self.store.update(SessionStore::restore);
    }

    pub fn login(&self, username: &str, credential: &str) -> bool {
        self.store
            .try_update(|s| s.login(username, credential))
            .unwrap_or(false)
    }

    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
    }
}
