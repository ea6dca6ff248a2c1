use std::cell::RefCell;
use std::collections::BTreeSet;

use super::*;

#[derive(Default)]
struct MemoryHost {
    stored: RefCell<Option<String>>,
    classes: RefCell<BTreeSet<String>>,
    prefers_dark: bool,
}

impl ThemeHost for MemoryHost {
    fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    fn store(&self, value: &str) {
        *self.stored.borrow_mut() = Some(value.to_owned());
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut classes = self.classes.borrow_mut();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

impl MemoryHost {
    fn has_dark_class(&self) -> bool {
        self.classes.borrow().contains(DARK_CLASS)
    }
}

// =============================================================
// read_preference
// =============================================================

#[test]
fn stored_value_wins_over_system_preference() {
    let host = MemoryHost { prefers_dark: true, ..MemoryHost::default() };
    host.store("light");
    assert_eq!(read_preference(&host), Theme::Light);
}

#[test]
fn system_preference_used_when_nothing_stored() {
    let host = MemoryHost { prefers_dark: true, ..MemoryHost::default() };
    assert_eq!(read_preference(&host), Theme::Dark);
    assert_eq!(read_preference(&MemoryHost::default()), Theme::Light);
}

#[test]
fn garbage_stored_value_falls_back_to_system() {
    let host = MemoryHost::default();
    host.store("purple");
    assert_eq!(read_preference(&host), Theme::Light);
}

// =============================================================
// toggle / apply
// =============================================================

#[test]
fn toggle_from_light_writes_dark_and_adds_class() {
    let host = MemoryHost::default();
    let next = toggle(&host, Theme::Light);
    assert_eq!(next, Theme::Dark);
    assert_eq!(host.stored().as_deref(), Some("dark"));
    assert!(host.has_dark_class());
}

#[test]
fn toggle_twice_reverses_storage_and_class() {
    let host = MemoryHost::default();
    let next = toggle(&host, Theme::Light);
    let back = toggle(&host, next);
    assert_eq!(back, Theme::Light);
    assert_eq!(host.stored().as_deref(), Some("light"));
    assert!(!host.has_dark_class());
}

#[test]
fn apply_does_not_persist() {
    let host = MemoryHost::default();
    apply(&host, Theme::Dark);
    assert!(host.has_dark_class());
    assert!(host.stored().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_host_is_inert_outside_browser() {
    let host = BrowserHost;
    assert_eq!(read_preference(&host), Theme::Light);
    assert_eq!(toggle(&host, Theme::Light), Theme::Dark);
}
