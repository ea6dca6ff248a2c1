use super::*;
use crate::test_support::{block_on, session};

#[test]
fn initials_from_two_word_name() {
    assert_eq!(initials("Ada Lovelace"), "AL");
}

#[test]
fn initials_from_email_local_part() {
    assert_eq!(initials("grace.hopper@example.com"), "GH");
    assert_eq!(initials("linus@example.com"), "L");
}

#[test]
fn initials_cap_at_two_letters() {
    assert_eq!(initials("Jean Paul Sartre"), "JP");
}

#[test]
fn initials_fallback_for_empty_name() {
    assert_eq!(initials(""), "?");
    assert_eq!(initials("   "), "?");
}

#[test]
fn profile_uses_display_name_when_present() {
    let mut s = session("u1");
    s.display_name = Some("Ada Lovelace".to_owned());
    s.avatar_url = Some("  ".to_owned());
    let profile = AccountProfile::from_session(&s);
    assert_eq!(profile.display_name, "Ada Lovelace");
    assert_eq!(profile.initials, "AL");
    assert!(profile.avatar_url.is_none());
}

#[test]
fn observe_requests_initialization_once_per_user() {
    let mut state = AccountState::default();
    let s = session("u1");
    assert_eq!(state.observe(Some(&s)), Some("u1".to_owned()));
    assert_eq!(state.observe(Some(&s)), None);
    assert!(state.profile.is_some());
}

#[test]
fn observe_sign_out_clears_profile_but_keeps_marker() {
    let mut state = AccountState::default();
    let s = session("u1");
    state.observe(Some(&s));
    assert_eq!(state.observe(None), None);
    assert!(state.profile.is_none());
    assert_eq!(state.observe(Some(&s)), None);
}

#[test]
fn observe_new_user_requests_initialization() {
    let mut state = AccountState::default();
    state.observe(Some(&session("u1")));
    assert_eq!(state.observe(Some(&session("u2"))), Some("u2".to_owned()));
}

#[test]
fn initialize_user_swallows_failures() {
    // Outside the browser the API reports `Unavailable`; this must not panic.
    block_on(initialize_user(&ClientConfig::default(), "u1"));
}
