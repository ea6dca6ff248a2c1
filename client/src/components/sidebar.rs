//! Navigation sidebar of the authenticated shell.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::sidebar::SidebarState;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("/dashboard", "Dashboard"),
    ("/projects/create", "New project"),
    ("/features/create", "New feature"),
    ("/settings", "Settings"),
];

/// Sidebar with primary navigation. Closes itself on every route change.
#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let path = pathname.get();
        sidebar.update(|s| s.navigated(&path));
    });

    let is_active = move |href: &'static str| {
        let path = pathname.get();
        path == href || (href != "/dashboard" && path.starts_with(href))
    };

    view! {
        <Show when=move || sidebar.with(|s| s.open)>
            <div class="sidebar-backdrop" on:click=move |_| sidebar.update(SidebarState::close)></div>
        </Show>
        <nav class="sidebar" class:sidebar--open=move || sidebar.with(|s| s.open)>
            <ul class="sidebar__list">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || is_active(href)
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
