use super::*;
use crate::test_support::session;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_loading_without_session() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.session.is_none());
}

#[test]
fn observe_session_clears_loading() {
    let mut state = AuthState::default();
    state.observe(Some(session("u1")));
    assert!(!state.loading);
    assert!(state.is_signed_in());
}

#[test]
fn observe_none_clears_loading_and_session() {
    let mut state = AuthState::default();
    state.observe(Some(session("u1")));
    state.observe(None);
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

// =============================================================
// AuthGate
// =============================================================

#[test]
fn gate_without_emission_stays_loading() {
    let gate = AuthGate::default();
    assert_eq!(gate.view(), GateView::Loading);
    assert!(!gate.has_redirected());
}

#[test]
fn gate_with_session_renders_content_without_redirect() {
    let mut gate = AuthGate::default();
    assert_eq!(gate.observe(Some(&session("u1"))), None);
    assert_eq!(gate.view(), GateView::Content);
    assert!(!gate.has_redirected());
}

#[test]
fn gate_without_session_redirects_home() {
    let mut gate = AuthGate::default();
    assert_eq!(gate.observe(None), Some("/"));
    assert_eq!(gate.view(), GateView::Empty);
}

#[test]
fn gate_redirects_exactly_once() {
    let mut gate = AuthGate::default();
    let redirects = [None, None, None]
        .into_iter()
        .filter_map(|s: Option<&Session>| gate.observe(s))
        .count();
    assert_eq!(redirects, 1);
    assert_eq!(gate.view(), GateView::Empty);
}

#[test]
fn gate_sign_out_after_content_redirects_once() {
    let mut gate = AuthGate::default();
    let s = session("u1");
    gate.observe(Some(&s));
    assert_eq!(gate.observe(None), Some(UNAUTH_REDIRECT));
    gate.observe(Some(&s));
    assert_eq!(gate.view(), GateView::Content);
    assert_eq!(gate.observe(None), None);
}
