//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages that only make sense signed out (login, signup) apply the
//! inverse of the gate: once auth has loaded with a session, move on to the
//! dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Landing route for signed-in users.
pub const SIGNED_IN_HOME: &str = "/dashboard";

/// True when a signed-out-only page should forward to the dashboard.
pub fn should_forward_signed_in(state: &AuthState) -> bool {
    !state.loading && state.session.is_some()
}

/// Redirect to the dashboard whenever auth has loaded and a session exists.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_forward_signed_in(&auth.get()) {
            navigate(SIGNED_IN_HOME, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
