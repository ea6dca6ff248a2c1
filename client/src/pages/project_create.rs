//! Project generation form.
//!
//! Submitting hands the request to the background generator and returns to
//! the dashboard; progress is shown by the app-wide generation indicator.

#[cfg(test)]
#[path = "project_create_test.rs"]
mod project_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::app_layout::AppLayout;
use crate::components::form_input::{FormInput, FormMessage, FormTextarea};
use crate::config::ClientConfig;
use crate::net::generation;
use crate::net::types::GenerationRequest;
use crate::state::generation::GenerationState;
use crate::util::auth::SIGNED_IN_HOME;

/// Shortest description worth sending to the generator.
pub const MIN_DESCRIPTION_LEN: usize = 20;

pub(crate) fn validate_generation(name: &str, description: &str) -> Result<GenerationRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Give the project a name.");
    }
    let description = description.trim();
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err("Describe the project in at least 20 characters.");
    }
    Ok(GenerationRequest { name: name.to_owned(), description: description.to_owned() })
}

#[component]
pub fn ProjectCreatePage() -> impl IntoView {
    view! {
        <AppLayout>
            <ProjectCreateView/>
        </AppLayout>
    }
}

#[component]
fn ProjectCreateView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let generation = expect_context::<RwSignal<GenerationState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = move || generation.with(|g| g.active && !g.finished);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if generation.with_untracked(|g| g.active && !g.finished) {
            error.set(Some("A project is already being generated.".to_owned()));
            return;
        }
        match validate_generation(&name.get_untracked(), &description.get_untracked()) {
            Ok(request) => {
                error.set(None);
                generation::start(config.clone(), generation, request);
                navigate(SIGNED_IN_HOME, NavigateOptions::default());
            }
            Err(msg) => error.set(Some(msg.to_owned())),
        }
    };

    view! {
        <div class="form-page">
            <header class="page-header">
                <h1 class="page-header__title">"New project"</h1>
            </header>
            <form class="form-card" on:submit=on_submit>
                <FormInput label="Project name" value=name placeholder="Checkout revamp" required=true/>
                <FormTextarea
                    label="What are you building?"
                    value=description
                    rows=8
                    placeholder="Describe goals, users and constraints. Markdown is fine."
                />
                <FormMessage message=error error=true/>
                <button class="btn btn--primary" type="submit" disabled=busy>
                    "Generate project"
                </button>
            </form>
        </div>
    }
}
