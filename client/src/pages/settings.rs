//! Account settings: profile fields and sign out.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::app_layout::AppLayout;
use crate::components::form_input::{FormInput, FormMessage};
use crate::net::identity::Identity;
use crate::net::types::ProfileUpdate;
use crate::state::account::{AccountProfile, AccountState};
use crate::state::auth::UNAUTH_REDIRECT;

/// Build an update holding only the fields that differ from `current`.
pub(crate) fn profile_update(current: &AccountProfile, display_name: &str, avatar_url: &str) -> ProfileUpdate {
    let display_name = display_name.trim();
    let avatar_url = avatar_url.trim();
    ProfileUpdate {
        display_name: (!display_name.is_empty() && display_name != current.display_name)
            .then(|| display_name.to_owned()),
        avatar_url: (avatar_url != current.avatar_url.as_deref().unwrap_or_default()).then(|| avatar_url.to_owned()),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AppLayout>
            <SettingsView/>
        </AppLayout>
    }
}

#[component]
fn SettingsView() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let account = expect_context::<RwSignal<AccountState>>();
    let navigate = use_navigate();

    let initial = account.with_untracked(|a| a.profile.clone());
    let display_name = RwSignal::new(initial.as_ref().map(|p| p.display_name.clone()).unwrap_or_default());
    let avatar_url = RwSignal::new(initial.as_ref().and_then(|p| p.avatar_url.clone()).unwrap_or_default());
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = {
        let identity = identity.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let Some(current) = account.with_untracked(|a| a.profile.clone()) else {
                error.set(Some("You are not signed in.".to_owned()));
                return;
            };
            let update = profile_update(&current, &display_name.get_untracked(), &avatar_url.get_untracked());
            if update.is_empty() {
                notice.set(Some("Nothing to save.".to_owned()));
                return;
            }
            busy.set(true);
            notice.set(None);
            error.set(None);

            let identity = identity.clone();
            leptos::task::spawn_local(async move {
                match identity.update_profile(&update).await {
                    Ok(_) => notice.set(Some("Profile updated.".to_owned())),
                    Err(e) => {
                        log::warn!("profile update failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let on_sign_out = move |_| {
        let identity = identity.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            identity.sign_out().await;
            navigate(UNAUTH_REDIRECT, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    };

    let email = move || account.with(|a| a.profile.as_ref().map(|p| p.email.clone()).unwrap_or_default());

    view! {
        <div class="form-page">
            <header class="page-header">
                <h1 class="page-header__title">"Settings"</h1>
                <p class="page-header__subtitle">{email}</p>
            </header>
            <form class="form-card" on:submit=on_submit>
                <FormInput label="Display name" value=display_name autocomplete="name" disabled=busy/>
                <FormInput
                    label="Avatar URL"
                    value=avatar_url
                    input_type="url"
                    placeholder="https://"
                    disabled=busy
                />
                <FormMessage message=notice/>
                <FormMessage message=error error=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save changes"
                </button>
            </form>
            <section class="form-card form-card--danger">
                <h2>"Session"</h2>
                <button class="btn" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </section>
        </div>
    }
}
