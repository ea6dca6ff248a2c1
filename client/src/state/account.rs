//! User-account state derived from the active session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome components (header menu, settings page) read the account profile
//! from here instead of re-deriving names and initials from the raw session.
//! After sign-in the backend user record is initialized once per user id;
//! failures are logged and swallowed.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::config::ClientConfig;
use crate::net::types::Session;

/// Display-ready view of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountProfile {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub initials: String,
    pub avatar_url: Option<String>,
}

impl AccountProfile {
    pub fn from_session(session: &Session) -> Self {
        let display_name = session.label().to_owned();
        Self {
            user_id: session.id.clone(),
            email: session.email.clone(),
            initials: initials(&display_name),
            display_name,
            avatar_url: session.avatar_url.clone().filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Account context value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountState {
    pub profile: Option<AccountProfile>,
    /// User id whose backend record has been initialized this page load.
    pub initialized_for: Option<String>,
}

impl AccountState {
    /// Sync the profile with a new identity emission.
    ///
    /// Returns the user id that still needs backend initialization, if any.
    pub fn observe(&mut self, session: Option<&Session>) -> Option<String> {
        self.profile = session.map(AccountProfile::from_session);
        let user_id = session.map(|s| s.id.clone())?;
        if self.initialized_for.as_deref() == Some(user_id.as_str()) {
            return None;
        }
        self.initialized_for = Some(user_id.clone());
        Some(user_id)
    }
}

/// Up to two uppercase initials from a display name or email.
pub fn initials(name: &str) -> String {
    let base = name.split('@').next().unwrap_or(name);
    let letters: String = base
        .split(|c: char| c.is_whitespace() || c == '.' || c == '_' || c == '-')
        .filter_map(|part| part.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}

/// Ensure the backend user record exists; errors are logged, never surfaced.
pub async fn initialize_user(config: &ClientConfig, user_id: &str) {
    match crate::net::api::init_user(config).await {
        Ok(()) => log::debug!("user record initialized: {user_id}"),
        Err(e) => log::warn!("user initialization failed for {user_id}: {e}"),
    }
}
