//! Browser/server shared client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the API base URL into a `<meta>` tag in the SSR shell;
//! the hydrated bundle reads it back so both sides agree on where REST and
//! identity calls go. An empty base means "same origin".

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "sprintdeck-api-base";

/// Environment variable read on the server to seed the API base URL.
pub const API_BASE_ENV: &str = "API_BASE_URL";

/// Client-side configuration provided through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL prepended to every `/api/...` and `/auth/...` path.
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: normalize_base(&api_base.into()) }
    }

    /// Load configuration for the current environment.
    ///
    /// In the browser this reads the shell's `<meta>` tag; on the server it
    /// reads [`API_BASE_ENV`]. Missing values fall back to same-origin.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::new(content.unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(std::env::var(API_BASE_ENV).unwrap_or_default())
        }
    }

    /// Join the configured base with an absolute `path`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
