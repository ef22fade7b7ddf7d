use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Emerald call-to-action
    Primary,
    /// WhatsApp green
    WhatsApp,
    /// Muted text-only action (close, cancel)
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Medium,
    Large,
    Hero,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-emerald-600 hover:bg-emerald-700 text-white font-black shadow-2xl transition-all hover:scale-105 active:scale-95"
            }
            ButtonVariant::WhatsApp => {
                "bg-[#25D366] hover:bg-[#128C7E] text-white font-black shadow-xl shadow-emerald-500/20 flex items-center justify-center gap-3 transition-all hover:scale-105"
            }
            ButtonVariant::Ghost => "text-slate-400 font-bold hover:text-slate-600 transition-colors",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Medium => "py-2",
            ButtonSize::Large => "py-5 rounded-2xl text-xl",
            ButtonSize::Hero => "py-6 px-14 rounded-2xl text-2xl",
        }
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Large)]
    size: ButtonSize,
    /// Click handler
    on_click: Callback<()>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let full_classes = format!("{} {} {}", variant.class(), size.class(), class);

    view! {
        <button type="button" class=full_classes on:click=move |_| on_click.run(())>
            {children()}
        </button>
    }
}

/// Form submit button; the form's `on:submit` handles the action
#[component]
pub fn SubmitButton(children: Children) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!(
                "w-full {} {} uppercase rounded-xl shadow-lg shadow-emerald-600/20 mt-4",
                ButtonVariant::Primary.class(),
                ButtonSize::Large.class(),
            )
        >
            {children()}
        </button>
    }
}
