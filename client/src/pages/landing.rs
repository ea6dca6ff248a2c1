//! Public landing page.

use leptos::prelude::*;

use crate::components::stats_section::StatsSection;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(AuthState::is_signed_in);

    view! {
        <div class="landing">
            <header class="landing__nav">
                <span class="landing__brand">"SprintDeck"</span>
                <span class="landing__spacer"></span>
                <ThemeToggle/>
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <a href="/login" class="btn">"Sign in"</a>
                        <a href="/signup" class="btn btn--primary">"Get started"</a>
                    }
                >
                    <a href="/dashboard" class="btn btn--primary">"Open dashboard"</a>
                </Show>
            </header>

            <section class="landing__hero">
                <h1>"Plan sprints in minutes, not meetings."</h1>
                <p class="landing__lede">
                    "Describe what you want to build. SprintDeck drafts the project, breaks it into "
                    "features and tasks, and keeps the plan in one place."
                </p>
                <a href="/projects/create" class="btn btn--primary btn--large">"Generate a project"</a>
            </section>

            <StatsSection/>

            <section class="landing__cta">
                <h2>"Ready for your next sprint?"</h2>
                <a href="/signup" class="btn btn--primary">"Create a free account"</a>
            </section>
        </div>
    }
}
