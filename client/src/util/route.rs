//! Route parameter helpers for the detail pages.
//!
//! Detail routes carry an opaque id segment and an optional `?tab=` query
//! value. Missing or unknown tabs resolve to `overview`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Tab used when `?tab=` is absent or unrecognized.
pub const DEFAULT_TAB: &str = "overview";

/// Tabs on the project detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectTab {
    #[default]
    Overview,
    Features,
}

impl ProjectTab {
    pub const ALL: [Self; 2] = [Self::Overview, Self::Features];

    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("features") => Self::Features,
            _ => Self::Overview,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => DEFAULT_TAB,
            Self::Features => "features",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Features => "Features",
        }
    }
}

/// Tabs on the feature detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureTab {
    #[default]
    Overview,
    Tasks,
    Discussion,
}

impl FeatureTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Tasks, Self::Discussion];

    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("tasks") => Self::Tasks,
            Some("discussion") => Self::Discussion,
            _ => Self::Overview,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => DEFAULT_TAB,
            Self::Tasks => "tasks",
            Self::Discussion => "discussion",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Tasks => "Tasks",
            Self::Discussion => "Discussion",
        }
    }
}

/// Link to `base` with the given tab; the default tab gets a bare URL.
pub fn tab_href(base: &str, tab: &str) -> String {
    if tab == DEFAULT_TAB { base.to_owned() } else { format!("{base}?tab={tab}") }
}

pub fn project_href(project_id: &str) -> String {
    format!("/projects/{project_id}")
}

pub fn feature_href(feature_id: &str) -> String {
    format!("/features/{feature_id}")
}

/// Feature-creation link preselecting `project_id`.
pub fn new_feature_href(project_id: Option<&str>) -> String {
    match project_id {
        Some(id) if !id.is_empty() => format!("/features/create?projectId={id}"),
        _ => "/features/create".to_owned(),
    }
}

/// Treat an empty route segment as missing.
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}
