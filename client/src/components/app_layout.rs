//! Authenticated application shell.
//!
//! ARCHITECTURE
//! ============
//! Gate → header + sidebar → page content, with the generation indicator
//! floating above everything. Protected pages wrap their content in
//! `AppLayout` rather than repeating the gate and chrome.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::generation_indicator::GenerationIndicator;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <AuthGate>
            <div class="app-shell">
                <Header/>
                <Sidebar/>
                <main class="app-shell__content">{children()}</main>
                <GenerationIndicator/>
            </div>
        </AuthGate>
    }
}
