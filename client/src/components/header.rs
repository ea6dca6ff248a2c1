//! Top bar of the authenticated shell: brand, drawer toggle, theme toggle,
//! and the user menu with sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the account profile for the avatar chip. Sign-out goes through the
//! identity facade; the gate around the shell then performs the redirect.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::net::identity::Identity;
use crate::state::account::AccountState;
use crate::state::sidebar::SidebarState;

#[component]
pub fn Header() -> impl IntoView {
    let account = expect_context::<RwSignal<AccountState>>();
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    let identity = expect_context::<Identity>();
    let menu_open = RwSignal::new(false);

    let display_name = move || account.with(|a| a.profile.as_ref().map(|p| p.display_name.clone()).unwrap_or_default());
    let email = move || account.with(|a| a.profile.as_ref().map(|p| p.email.clone()).unwrap_or_default());
    let initials = move || account.with(|a| a.profile.as_ref().map_or_else(|| "?".to_owned(), |p| p.initials.clone()));
    let avatar = move || account.with(|a| a.profile.as_ref().and_then(|p| p.avatar_url.clone()));

    let on_sign_out = move |_| {
        menu_open.set(false);
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            identity.sign_out().await;
            log::info!("signed out");
        });
    };

    view! {
        <header class="app-header">
            <button
                class="btn btn--icon app-header__menu"
                aria-label="Toggle navigation"
                on:click=move |_| sidebar.update(SidebarState::toggle)
            >
                "\u{2630}"
            </button>
            <a href="/dashboard" class="app-header__brand">"SprintDeck"</a>
            <span class="app-header__spacer"></span>
            <ThemeToggle/>
            <div class="app-header__user">
                <button
                    class="app-header__avatar"
                    title=display_name
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || match avatar() {
                        Some(url) => view! { <img class="app-header__avatar-img" src=url alt=""/> }.into_any(),
                        None => view! { <span class="app-header__initials">{initials}</span> }.into_any(),
                    }}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="app-header__dropdown" role="menu">
                        <div class="app-header__identity">
                            <span class="app-header__name">{display_name}</span>
                            <span class="app-header__email">{email}</span>
                        </div>
                        <a href="/settings" class="app-header__item" on:click=move |_| menu_open.set(false)>
                            "Settings"
                        </a>
                        <button class="app-header__item" on:click=on_sign_out.clone()>
                            "Sign out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
