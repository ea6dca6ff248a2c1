//! Wire DTOs for the identity and project REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON so serde stays declarative. Optional
//! fields default so older backends that omit them still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity record owned by the external identity service.
///
/// The app only observes it; nothing here persists or validates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identity-provider user id.
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Session {
    /// Name to show in chrome: display name when set, else the email.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Email + password pair for credential sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload for account creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.avatar_url.is_none()
    }
}

/// A project as listed on the dashboard and shown on its detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub feature_count: u32,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Delivery status of a feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    #[default]
    Backlog,
    Planned,
    InProgress,
    Done,
}

impl FeatureStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Planned => "Planned",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }
}

/// Relative priority of a feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a `<select>` value; unknown values map to the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// A feature belonging to a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub project_id: String,
    pub title: String,
    /// Markdown body.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: FeatureStatus,
    #[serde(default)]
    pub priority: Priority,
    /// Task titles broken out of the feature, in order.
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Payload for `POST /api/features`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFeature {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Payload for `POST /api/projects/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub name: String,
    pub description: String,
}

/// Response of `POST /api/projects/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GenerationStarted {
    pub generation_id: String,
}

/// Snapshot returned by `GET /api/generations/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GenerationStatus {
    /// Percent complete, 0–100.
    pub progress: f64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<String>,
}
