//! Labelled form controls bound to `RwSignal<String>`.
//!
//! DESIGN
//! ======
//! Every page form uses these so label/input/error markup and the
//! `form-field` class hierarchy stay identical across login, signup,
//! settings, and creation pages.

use leptos::prelude::*;

/// Single-line text input with label and optional inline error.
#[component]
pub fn FormInput(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] name: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into, default = Signal::stored(None))] error: Signal<Option<String>>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--error=move || error.get().is_some()>
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                name=name
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Multi-line text area with label.
#[component]
pub fn FormTextarea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--multiline"
                rows=rows.to_string()
                placeholder=placeholder
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Select input over `(value, label)` options.
#[component]
pub fn FormSelect(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(opt_value, opt_label)| {
                            let selected = value.get_untracked() == opt_value;
                            view! { <option value=opt_value selected=selected>{opt_label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Inline form-level status line (error or info).
#[component]
pub fn FormMessage(#[prop(into)] message: Signal<Option<String>>, #[prop(optional)] error: bool) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="form-message" class:form-message--error=error role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
