//! Sign-in page supporting email + password and third-party providers.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::{FormInput, FormMessage};
use crate::net::identity::{Identity, OAuthProvider};
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::util::auth::{SIGNED_IN_HOME, install_signed_in_redirect};

/// Shortest password the identity service accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'));
    if !valid {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_sign_in(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(Credentials { email, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = {
        let identity = identity.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let credentials = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
                Ok(c) => c,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);

            let identity = identity.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match identity.sign_in(&credentials).await {
                    Ok(_) => navigate(SIGNED_IN_HOME, NavigateOptions::default()),
                    Err(e) => {
                        log::info!("sign in failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    let provider_button = move |provider: OAuthProvider| {
        let identity = identity.clone();
        view! {
            <button
                type="button"
                class="btn auth-card__provider"
                disabled=move || busy.get()
                on:click=move |_| identity.sign_in_with_provider(provider)
            >
                {provider.label()}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to SprintDeck"</p>
                <form class="auth-card__form" on:submit=on_submit>
                    <FormInput
                        label="Email"
                        value=email
                        input_type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        required=true
                    />
                    <FormInput
                        label="Password"
                        value=password
                        input_type="password"
                        autocomplete="current-password"
                        required=true
                    />
                    <FormMessage message=error error=true/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="auth-card__divider">"or"</div>
                {provider_button(OAuthProvider::Google)}
                {provider_button(OAuthProvider::GitHub)}
                <p class="auth-card__switch">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
