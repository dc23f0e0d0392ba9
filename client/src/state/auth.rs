//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Mutation goes through
//! [`crate::state::session::SessionStore`]; everything else only reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Minimal profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Coarse lifecycle phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup restore from durable storage has not finished.
    Restoring,
    /// Restore finished and nobody is signed in.
    Anonymous,
    /// Restore finished and an identity is present.
    Authenticated,
}

/// Authentication state tracking the current identity and restore status.
///
/// `restoring` starts `true` and is cleared exactly once by the startup
/// restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub restoring: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, restoring: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.restoring, &self.user) {
            (true, _) => SessionPhase::Restoring,
            (false, None) => SessionPhase::Anonymous,
            (false, Some(_)) => SessionPhase::Authenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }
}
