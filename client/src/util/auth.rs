//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior. The
//! decision logic lives in [`RouteGuard`] so it can be exercised without a
//! reactive runtime; `components::require_auth` wires it to the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::{AuthState, SessionPhase};

/// Route that unauthenticated visitors are sent to.
pub const SIGN_IN_ROUTE: &str = "/login";

/// Route that a successful sign-in lands on.
pub const HOME_ROUTE: &str = "/dashboard";

/// Navigation capability the guard depends on.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn redirect(&self, path: &str) {
        self(path);
    }
}

/// What a guarded route should show for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Session is still restoring; show a neutral placeholder.
    Loading,
    /// Render the protected children.
    Content,
    /// Nothing to show; a redirect has been issued.
    Empty,
}

/// One-shot redirect gate over session state.
///
/// Remembers whether the current anonymous episode has already been
/// redirected, so re-evaluations do not navigate again. The flag resets once
/// the session becomes authenticated.
#[derive(Clone, Debug, Default)]
pub struct RouteGuard {
    redirected: bool,
}

impl RouteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what to render, navigating at most once per anonymous episode.
    pub fn evaluate(&mut self, state: &AuthState, navigator: &impl Navigator) -> GuardView {
        match state.phase() {
            SessionPhase::Restoring => GuardView::Loading,
            SessionPhase::Authenticated => {
                self.redirected = false;
                GuardView::Content
            }
            SessionPhase::Anonymous => {
                if !self.redirected {
                    self.redirected = true;
                    log::debug!("route guard: redirecting to {SIGN_IN_ROUTE}");
                    navigator.redirect(SIGN_IN_ROUTE);
                }
                GuardView::Empty
            }
        }
    }
}
