use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled text input bound to a signal.
///
/// `required` and `pattern` are passed through to the input so the browser
/// blocks a bad submit before any Rust code runs.
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Form control name
    name: &'static str,
    /// Whether field is required
    #[prop(default = false)]
    required: bool,
    /// Input type (text, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// HTML validation pattern
    #[prop(optional)]
    pattern: Option<&'static str>,
    /// Message the browser shows when `pattern` does not match
    #[prop(optional)]
    title: Option<&'static str>,
    /// Helper line rendered under the input (right-to-left Urdu)
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1">
            <label for=name class="text-xs font-bold text-slate-500 uppercase ml-1">
                {label}
            </label>
            <input
                id=name
                name=name
                type=input_type
                required=required
                pattern=pattern
                title=title
                placeholder=placeholder
                class="w-full border-2 border-slate-200 bg-white p-4 rounded-xl text-slate-900 placeholder:text-slate-400 focus:border-emerald-500 focus:ring-4 focus:ring-emerald-500/10 outline-none transition-all font-medium"
                class:border-red-500=has_error
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {hint.map(|text| view! {
                <p class="text-[10px] text-slate-400 mt-1 ml-1 text-right urdu-text">{text}</p>
            })}
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-600 ml-1">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
