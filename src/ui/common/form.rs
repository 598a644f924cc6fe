use leptos::prelude::*;

/// Labelled single-line input of the inquiry form
#[component]
pub fn FormField(
    /// Upper-case label above the input
    label: &'static str,
    /// `name` attribute
    name: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Marks the input as required for the browser as well
    #[prop(default = false)]
    required: bool,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Validation message shown under the input
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="zera-field">
            <label class="zera-label" for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                class=move || if has_error() { "zera-input zera-input--invalid" } else { "zera-input" }
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// Labelled multi-line input
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 4)]
    rows: u32,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="zera-field">
            <label class="zera-label" for=name>{label}</label>
            <textarea
                id=name
                name=name
                class="zera-input zera-input--area"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error
            .as_ref()
            .and_then(|e| e.get())
            .map(|err| view! { <p class="zera-field__error" role="alert">{err}</p> })
    }
}
