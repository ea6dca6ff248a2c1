//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates the class. Browser access goes through [`ThemeHost`] so the same
//! logic runs against an in-memory host in tests.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Environment the theme is read from and applied to.
pub trait ThemeHost {
    fn stored(&self) -> Option<String>;
    fn store(&self, value: &str);
    fn set_root_class(&self, class: &str, enabled: bool);
    /// System `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool;
}

/// The real browser: `window.localStorage` and `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl ThemeHost for BrowserHost {
    fn stored(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                let _ = if enabled { class_list.add_1(class) } else { class_list.remove_1(class) };
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (class, enabled);
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Read the preference: stored value first, then the system preference.
pub fn read_preference(host: &impl ThemeHost) -> Theme {
    host.stored()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_else(|| if host.prefers_dark() { Theme::Dark } else { Theme::Light })
}

/// Apply `theme` to the document root without persisting it.
pub fn apply(host: &impl ThemeHost, theme: Theme) {
    host.set_root_class(DARK_CLASS, theme.is_dark());
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(host: &impl ThemeHost, current: Theme) -> Theme {
    let next = current.toggled();
    apply(host, next);
    host.store(next.as_str());
    next
}
