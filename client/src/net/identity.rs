//! Identity-provider bridge: auth-state stream plus account mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity service is external. This module exposes it to the app as an
//! observer stream (`IdentityHub`) that yields `None` or a `Session`, and a
//! facade (`Identity`) whose mutations call the REST helpers and then publish
//! the resulting session to every subscriber.
//!
//! DESIGN
//! ======
//! The hub stays unresolved until the first publish. Subscribers registered
//! after that point receive the current value immediately, so a late-mounted
//! gate never waits on an event that already happened.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::ClientConfig;
use crate::error::AccountError;

use super::api;
use super::types::{Credentials, NewAccount, ProfileUpdate, Session};

type Listener = Arc<dyn Fn(Option<Session>) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    resolved: bool,
    session: Option<Session>,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Observable auth-state stream shared by every subscriber.
#[derive(Clone, Default)]
pub struct IdentityHub {
    inner: Arc<Mutex<HubInner>>,
}

impl IdentityHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HubInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `listener` for auth-state changes.
    ///
    /// If the stream has already resolved, `listener` is called synchronously
    /// with the current value before this returns.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<Session>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.resolved.then(|| inner.session.clone()))
        };
        if let Some(session) = current {
            listener(session);
        }

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
                inner.listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Publish a new auth state and notify every subscriber.
    pub fn publish(&self, session: Option<Session>) {
        let listeners = {
            let mut inner = self.lock();
            inner.resolved = true;
            inner.session.clone_from(&session);
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(session.clone());
        }
    }

    /// Last published session, `None` while unresolved or signed out.
    pub fn current(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    #[cfg(test)]
    pub(crate) fn is_resolved(&self) -> bool {
        self.lock().resolved
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Handle that removes a listener when unsubscribed or dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Third-party sign-in providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Continue with Google",
            Self::GitHub => "Continue with GitHub",
        }
    }
}

/// Account operations against the identity service, provided via context.
#[derive(Clone)]
pub struct Identity {
    hub: IdentityHub,
    config: ClientConfig,
}

impl Identity {
    pub fn new(config: ClientConfig) -> Self {
        Self { hub: IdentityHub::new(), config }
    }

    pub fn hub(&self) -> &IdentityHub {
        &self.hub
    }

    /// Resolve the stream from the service's current session.
    pub async fn restore(&self) {
        let session = api::fetch_session(&self.config).await;
        log::debug!("identity restored: signed_in={}", session.is_some());
        self.hub.publish(session);
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Propagates the identity service's refusal or transport failure.
    pub async fn create_account(&self, account: &NewAccount) -> Result<Session, AccountError> {
        let session = api::sign_up(&self.config, account).await?;
        self.hub.publish(Some(session.clone()));
        Ok(session)
    }

    /// Sign in with email + password.
    ///
    /// # Errors
    ///
    /// Propagates the identity service's refusal or transport failure.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AccountError> {
        let session = api::sign_in(&self.config, credentials).await?;
        self.hub.publish(Some(session.clone()));
        Ok(session)
    }

    /// Hand the browser to the third-party sign-in flow.
    ///
    /// The flow returns to the app with a session cookie; the next
    /// [`Identity::restore`] picks it up.
    pub fn sign_in_with_provider(&self, provider: OAuthProvider) {
        let url = self.config.endpoint(&api::oauth_endpoint(provider.slug()));
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }

    /// Update display name and/or avatar of the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotSignedIn`] when no session is active,
    /// otherwise propagates the identity service's failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Session, AccountError> {
        let Some(current) = self.hub.current() else {
            return Err(AccountError::NotSignedIn);
        };
        if update.is_empty() {
            return Ok(current);
        }
        let session = api::update_profile(&self.config, update).await?;
        self.hub.publish(Some(session.clone()));
        Ok(session)
    }

    /// End the session and publish the signed-out state.
    pub async fn sign_out(&self) {
        api::sign_out(&self.config).await;
        self.hub.publish(None);
    }
}
