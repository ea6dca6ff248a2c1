//! REST API helpers for the identity and project endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read helpers return `Option`/empty lists so a failed fetch degrades to an
//! empty view; mutating helpers return `Result` so forms can show the reason.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ClientConfig;
use crate::error::{AccountError, ApiError};

use super::types::{
    Credentials, Feature, GenerationRequest, GenerationStarted, GenerationStatus, NewAccount, NewFeature,
    ProfileUpdate, Project, Session,
};

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(project_id: &str) -> String {
    format!("/api/projects/{project_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_features_endpoint(project_id: &str) -> String {
    format!("/api/projects/{project_id}/features")
}

#[cfg(any(test, feature = "hydrate"))]
fn feature_endpoint(feature_id: &str) -> String {
    format!("/api/features/{feature_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn generation_endpoint(generation_id: &str) -> String {
    format!("/api/generations/{generation_id}")
}

/// Path of the third-party sign-in flow for `provider` (e.g. `"google"`).
pub fn oauth_endpoint(provider: &str) -> String {
    format!("/auth/{provider}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, endpoint: &'static str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { endpoint, status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, endpoint: &'static str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = send_post(url, body).await?;
    if !resp.ok() {
        return Err(ApiError::Status { endpoint, status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_post<B: serde::Serialize>(url: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Post to an identity endpoint and decode the returned session.
#[cfg(feature = "hydrate")]
async fn post_identity<B: serde::Serialize>(
    url: &str,
    endpoint: &'static str,
    body: &B,
) -> Result<Session, AccountError> {
    let resp = send_post(url, body).await?;
    if !resp.ok() {
        return Err(AccountError::from_identity_status(endpoint, resp.status()));
    }
    resp.json::<Session>()
        .await
        .map_err(|e| AccountError::Api(ApiError::Decode(e.to_string())))
}

// =============================================================================
// Identity
// =============================================================================

/// Fetch the active session from `/api/auth/session`.
/// Returns `None` when signed out, on failure, or on the server.
pub async fn fetch_session(config: &ClientConfig) -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint("/api/auth/session");
        get_json::<Session>(&url, "session").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Sign in with email + password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns [`AccountError::Rejected`] for bad credentials, or an API error
/// when the request cannot be completed.
pub async fn sign_in(config: &ClientConfig, credentials: &Credentials) -> Result<Session, AccountError> {
    #[cfg(feature = "hydrate")]
    {
        post_identity(&config.endpoint("/api/auth/sign-in"), crate::error::SIGN_IN, credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable.into())
    }
}

/// Create an account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns [`AccountError::Rejected`] when the email is taken or the payload
/// is refused, or an API error when the request cannot be completed.
pub async fn sign_up(config: &ClientConfig, account: &NewAccount) -> Result<Session, AccountError> {
    #[cfg(feature = "hydrate")]
    {
        post_identity(&config.endpoint("/api/auth/sign-up"), crate::error::CREATE_ACCOUNT, account).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, account);
        Err(ApiError::Unavailable.into())
    }
}

/// Update profile fields via `POST /api/auth/profile`.
///
/// # Errors
///
/// Returns an error when the identity service refuses the update.
pub async fn update_profile(config: &ClientConfig, update: &ProfileUpdate) -> Result<Session, AccountError> {
    #[cfg(feature = "hydrate")]
    {
        post_identity(&config.endpoint("/api/auth/profile"), crate::error::UPDATE_PROFILE, update).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, update);
        Err(ApiError::Unavailable.into())
    }
}

/// End the session via `POST /api/auth/sign-out`.
pub async fn sign_out(config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint("/api/auth/sign-out");
        let _ = send_post(&url, &serde_json::json!({})).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Ensure the backend holds a user record for the signed-in session.
///
/// # Errors
///
/// Returns an error when the backend refuses or cannot be reached.
pub async fn init_user(config: &ClientConfig) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint("/api/users/init");
        let resp = send_post(&url, &serde_json::json!({})).await?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: "init user", status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// Projects and features
// =============================================================================

/// List the signed-in user's projects. Empty on failure.
pub async fn list_projects(config: &ClientConfig) -> Vec<Project> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<Vec<Project>>(&config.endpoint("/api/projects"), "list projects").await {
            Ok(projects) => projects,
            Err(e) => {
                log::warn!("list projects: {e}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Vec::new()
    }
}

/// Fetch one project. `None` when missing or on failure.
pub async fn fetch_project(config: &ClientConfig, project_id: &str) -> Option<Project> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(&project_endpoint(project_id));
        get_json::<Project>(&url, "fetch project").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, project_id);
        None
    }
}

/// List a project's features. Empty on failure.
pub async fn list_project_features(config: &ClientConfig, project_id: &str) -> Vec<Feature> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(&project_features_endpoint(project_id));
        get_json::<Vec<Feature>>(&url, "list features").await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, project_id);
        Vec::new()
    }
}

/// Fetch one feature. `None` when missing or on failure.
pub async fn fetch_feature(config: &ClientConfig, feature_id: &str) -> Option<Feature> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(&feature_endpoint(feature_id));
        get_json::<Feature>(&url, "fetch feature").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, feature_id);
        None
    }
}

/// Create a feature via `POST /api/features`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn create_feature(config: &ClientConfig, feature: &NewFeature) -> Result<Feature, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint("/api/features"), "create feature", feature).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, feature);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// Generation pipeline
// =============================================================================

/// Start a project generation via `POST /api/projects/generate`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn start_generation(
    config: &ClientConfig,
    request: &GenerationRequest,
) -> Result<GenerationStarted, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint("/api/projects/generate"), "start generation", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Poll a running generation via `GET /api/generations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the response does not decode.
pub async fn fetch_generation(config: &ClientConfig, generation_id: &str) -> Result<GenerationStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(&generation_endpoint(generation_id));
        get_json(&url, "poll generation").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, generation_id);
        Err(ApiError::Unavailable)
    }
}
