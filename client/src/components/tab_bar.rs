//! Query-string driven tab strip for detail pages.

use leptos::prelude::*;

use crate::util::route::tab_href;

/// Tab links for `base`; `active` is the current `?tab=` value.
///
/// `tabs` holds `(query value, label)` pairs.
#[component]
pub fn TabBar(
    #[prop(into)] base: Signal<String>,
    tabs: Vec<(&'static str, &'static str)>,
    #[prop(into)] active: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {tabs
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <a
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active.get() == value
                            role="tab"
                            aria-selected=move || (active.get() == value).to_string()
                            href=move || tab_href(&base.get(), value)
                        >
                            {label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
