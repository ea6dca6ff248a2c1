use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::test_support::{block_on, session};

fn recorder() -> (Arc<Mutex<Vec<Option<String>>>>, impl Fn(Option<Session>) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |s: Option<Session>| sink.lock().unwrap().push(s.map(|s| s.id)))
}

// =============================================================
// IdentityHub
// =============================================================

#[test]
fn new_hub_is_unresolved() {
    let hub = IdentityHub::new();
    assert!(!hub.is_resolved());
    assert!(hub.current().is_none());
}

#[test]
fn subscriber_is_not_called_before_first_publish() {
    let hub = IdentityHub::new();
    let (seen, listener) = recorder();
    let _sub = hub.subscribe(listener);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn publish_notifies_every_subscriber() {
    let hub = IdentityHub::new();
    let (a, la) = recorder();
    let (b, lb) = recorder();
    let _sa = hub.subscribe(la);
    let _sb = hub.subscribe(lb);

    hub.publish(Some(session("u1")));
    hub.publish(None);

    assert_eq!(*a.lock().unwrap(), vec![Some("u1".to_owned()), None]);
    assert_eq!(*b.lock().unwrap(), vec![Some("u1".to_owned()), None]);
}

#[test]
fn late_subscriber_receives_current_value_immediately() {
    let hub = IdentityHub::new();
    hub.publish(Some(session("u2")));

    let (seen, listener) = recorder();
    let _sub = hub.subscribe(listener);
    assert_eq!(*seen.lock().unwrap(), vec![Some("u2".to_owned())]);
}

#[test]
fn late_subscriber_receives_signed_out_value() {
    let hub = IdentityHub::new();
    hub.publish(None);

    let (seen, listener) = recorder();
    let _sub = hub.subscribe(listener);
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let hub = IdentityHub::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let sub = hub.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(hub.listener_count(), 1);

    sub.unsubscribe();
    assert_eq!(hub.listener_count(), 0);

    hub.publish(Some(session("u1")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let hub = IdentityHub::new();
    {
        let _sub = hub.subscribe(|_| {});
        assert_eq!(hub.listener_count(), 1);
    }
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn subscription_outliving_hub_is_harmless() {
    let hub = IdentityHub::new();
    let sub = hub.subscribe(|_| {});
    drop(hub);
    sub.unsubscribe();
}

#[test]
fn listener_may_subscribe_reentrantly() {
    let hub = IdentityHub::new();
    let inner_hub = hub.clone();
    let nested = Arc::new(Mutex::new(Vec::new()));
    let nested_sink = Arc::clone(&nested);
    let _sub = hub.subscribe(move |_| {
        let sub = inner_hub.subscribe(|_| {});
        nested_sink.lock().unwrap().push(sub);
    });
    hub.publish(None);
    assert_eq!(nested.lock().unwrap().len(), 1);
}

// =============================================================
// Identity facade
// =============================================================

#[test]
fn update_profile_without_session_fails() {
    let identity = Identity::new(ClientConfig::default());
    let update = ProfileUpdate { display_name: Some("Ada".to_owned()), avatar_url: None };
    assert_eq!(block_on(identity.update_profile(&update)), Err(AccountError::NotSignedIn));
}

#[test]
fn empty_profile_update_returns_current_session() {
    let identity = Identity::new(ClientConfig::default());
    identity.hub().publish(Some(session("u1")));
    let result = block_on(identity.update_profile(&ProfileUpdate::default()));
    assert_eq!(result, Ok(session("u1")));
}

#[test]
fn sign_out_publishes_signed_out_state() {
    let identity = Identity::new(ClientConfig::default());
    identity.hub().publish(Some(session("u1")));
    let (seen, listener) = recorder();
    let _sub = identity.hub().subscribe(listener);

    block_on(identity.sign_out());

    assert!(identity.hub().current().is_none());
    assert_eq!(*seen.lock().unwrap(), vec![Some("u1".to_owned()), None]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_outside_browser_resolves_signed_out() {
    let identity = Identity::new(ClientConfig::default());
    block_on(identity.restore());
    assert!(identity.hub().is_resolved());
    assert!(identity.hub().current().is_none());
}

#[test]
fn oauth_provider_slugs() {
    assert_eq!(OAuthProvider::Google.slug(), "google");
    assert_eq!(OAuthProvider::GitHub.slug(), "github");
}
