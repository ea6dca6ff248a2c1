//! Sidebar drawer state.
//!
//! On narrow screens the sidebar is an overlay drawer; it closes whenever the
//! route changes so navigation never leaves it covering the new page.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    /// Path the drawer was last synced to.
    pub last_path: Option<String>,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Record a route change; closes the drawer when the path differs.
    pub fn navigated(&mut self, path: &str) {
        if self.last_path.as_deref() != Some(path) {
            self.last_path = Some(path.to_owned());
            self.open = false;
        }
    }
}
