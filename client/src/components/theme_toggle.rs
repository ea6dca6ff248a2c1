//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme::{BrowserHost, toggle};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="btn btn--icon theme-toggle"
            title="Toggle dark mode"
            aria-label="Toggle dark mode"
            on:click=move |_| {
                let next = toggle(&BrowserHost, theme.get_untracked());
                theme.set(next);
            }
        >
            {move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263e}" }}
        </button>
    }
}
