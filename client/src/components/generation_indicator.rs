//! Floating progress card for the running project generation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::generation::GenerationState;

/// Renders nothing while no generation is active. Otherwise shows a progress
/// bar sized to `progress`, the latest message, and a button that opens the
/// project once its id is known.
#[component]
pub fn GenerationIndicator() -> impl IntoView {
    let generation = expect_context::<RwSignal<GenerationState>>();
    let navigate = use_navigate();

    let width = move || generation.with(GenerationState::progress_width).unwrap_or_default();
    let message = move || generation.with(|g| g.error.clone().unwrap_or_else(|| g.progress_message.clone()));
    let failed = move || generation.with(|g| g.error.is_some());
    let finished = move || generation.with(|g| g.finished);

    let on_view = move |_| {
        if let Some(href) = generation.with_untracked(GenerationState::project_href) {
            generation.update(GenerationState::reset);
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <Show when=move || generation.with(|g| g.active)>
            <aside class="generation-indicator" class:generation-indicator--failed=failed role="status">
                <div class="generation-indicator__header">
                    <span class="generation-indicator__title">
                        {move || if finished() { "Project ready" } else { "Generating project" }}
                    </span>
                    <Show when=finished>
                        <button
                            class="generation-indicator__dismiss"
                            title="Dismiss"
                            on:click=move |_| generation.update(GenerationState::reset)
                        >
                            "\u{00d7}"
                        </button>
                    </Show>
                </div>
                <div class="generation-indicator__track">
                    <div class="generation-indicator__bar" style:width=width></div>
                </div>
                <p class="generation-indicator__message">{message}</p>
                <button
                    class="btn btn--primary generation-indicator__view"
                    disabled=move || !generation.with(GenerationState::can_view_project)
                    on:click=on_view.clone()
                >
                    "View project"
                </button>
            </aside>
        </Show>
    }
}
