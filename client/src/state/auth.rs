//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the app-wide mirror of the identity stream used by chrome
//! (header, landing page). `AuthGate` is the per-mount decision machine the
//! gate component feeds from its own subscription.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Route unauthenticated visitors are sent to.
pub const UNAUTH_REDIRECT: &str = "/";

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the identity stream has emitted once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Fold one identity-stream emission into the state.
    pub fn observe(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

/// What the gate renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateView {
    /// First identity callback still pending.
    #[default]
    Loading,
    /// Session present; children are shown.
    Content,
    /// No session; nothing is shown while the redirect happens.
    Empty,
}

/// Decision machine behind the authentication gate.
///
/// A redirect is issued at most once per gate, the first time the stream
/// reports no session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthGate {
    view: GateView,
    redirected: bool,
}

impl AuthGate {
    pub fn view(&self) -> GateView {
        self.view
    }

    #[cfg(test)]
    pub(crate) fn has_redirected(&self) -> bool {
        self.redirected
    }

    /// Apply one identity-stream emission.
    ///
    /// Returns the redirect target when this emission must trigger navigation.
    pub fn observe(&mut self, session: Option<&Session>) -> Option<&'static str> {
        if session.is_some() {
            self.view = GateView::Content;
            return None;
        }
        self.view = GateView::Empty;
        if self.redirected {
            return None;
        }
        self.redirected = true;
        Some(UNAUTH_REDIRECT)
    }
}
