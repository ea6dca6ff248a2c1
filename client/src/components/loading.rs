//! Loading placeholders shown by the gate and by `Suspense` boundaries.

use leptos::prelude::*;

/// Full-height blocking loader.
#[component]
pub fn LoadingScreen(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <span class="loading-screen__spinner" aria-hidden="true"></span>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}

/// Inline loader for sections inside a page.
#[component]
pub fn LoadingInline(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
    view! { <p class="loading-inline">{message}</p> }
}
