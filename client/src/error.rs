//! Error types surfaced by identity and REST helpers.
//!
//! ERROR HANDLING
//! ==============
//! Pages render these inline next to the form that triggered them; nothing
//! here is retried. `Display` strings are user-facing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a REST call against the backend API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Failure of an identity-provider operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    /// The operation needs a signed-in session and none is active.
    #[error("no user is signed in")]
    NotSignedIn,
    /// The identity service refused the credentials or profile change.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Identity endpoint labels, used in error text and status mapping.
pub const SIGN_IN: &str = "sign in";
pub const CREATE_ACCOUNT: &str = "create account";
pub const UPDATE_PROFILE: &str = "update profile";

impl AccountError {
    /// Map an HTTP failure from an identity endpoint into a user-facing error.
    ///
    /// Only credential endpoints report bad credentials; a refused profile
    /// update gets its own wording. Other statuses stay API errors.
    pub fn from_identity_status(endpoint: &'static str, status: u16) -> Self {
        let message = match (endpoint, status) {
            (SIGN_IN | CREATE_ACCOUNT, 400 | 401 | 403) => "Invalid email or password.",
            (CREATE_ACCOUNT, 409) => "An account with this email already exists.",
            (UPDATE_PROFILE, 400) => "The profile change was rejected. Check the values and try again.",
            (UPDATE_PROFILE, 401 | 403) => "Your session has expired. Sign in again to update your profile.",
            _ => return Self::Api(ApiError::Status { endpoint, status }),
        };
        Self::Rejected(message.to_owned())
    }
}
