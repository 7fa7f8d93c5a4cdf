//! Labeled text input with inline validation message.

use leptos::prelude::*;

use crate::forms::validation::FieldError;

/// Text input bound to `value`. Shows `error` when it names `name`.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    error: RwSignal<Option<FieldError>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let invalid = move || error.with(|e| e.as_ref().is_some_and(|e| e.field == name));

    view! {
        <label class=move || if invalid() { "form-field form-field--invalid" } else { "form-field" }>
            <span class="form-field__label">{label} {required.then_some(" *")}</span>
            <input
                class="form-field__input"
                type=input_type
                name=name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldMessage field=name error=error/>
        </label>
    }
}

/// Inline message for `field`, hidden unless `error` names it.
#[component]
pub fn FieldMessage(field: &'static str, error: RwSignal<Option<FieldError>>) -> impl IntoView {
    let message = move || error.with(|e| e.as_ref().filter(|e| e.field == field).map(|e| e.message.clone()));

    view! {
        <Show when=move || message().is_some()>
            <span class="form-field__error" role="alert">{move || message().unwrap_or_default()}</span>
        </Show>
    }
}
