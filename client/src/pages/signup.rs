//! Account creation page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::{FormInput, FormMessage};
use crate::net::identity::Identity;
use crate::net::types::NewAccount;
use crate::pages::login::{MIN_PASSWORD_LEN, validate_email};
use crate::state::auth::AuthState;
use crate::util::auth::{SIGNED_IN_HOME, install_signed_in_redirect};

pub(crate) fn validate_sign_up(
    display_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<NewAccount, &'static str> {
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err("Enter your name.");
    }
    let email = validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(NewAccount { email, password: password.to_owned(), display_name: display_name.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_signed_in_redirect(auth, navigate.clone());

    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let account = match validate_sign_up(
            &display_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(account) => account,
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
            match identity.create_account(&account).await {
                Ok(session) => {
                    log::info!("account created: {}", session.id);
                    navigate(SIGNED_IN_HOME, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Start planning sprints with SprintDeck"</p>
                <form class="auth-card__form" on:submit=on_submit>
                    <FormInput label="Name" value=display_name autocomplete="name" required=true/>
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
                        autocomplete="new-password"
                        required=true
                    />
                    <FormInput
                        label="Confirm password"
                        value=confirm
                        input_type="password"
                        autocomplete="new-password"
                        required=true
                    />
                    <FormMessage message=error error=true/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
