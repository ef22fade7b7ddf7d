use leptos::prelude::*;

/// Full-screen modal overlay.
///
/// The overlay stays mounted and is shown or hidden through classes, so the
/// server-rendered markup and the hydrated tree always agree.
#[component]
pub fn BaseModal(
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal (Escape key, backdrop click)
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
    /// Stacking order, the confirmation sits above the form
    #[prop(default = "z-[100]")]
    z_index: &'static str,
    /// Backdrop tint and blur
    #[prop(default = "bg-slate-950/90 backdrop-blur-md")]
    backdrop: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
    /// Accessible label of the dialog
    #[prop(optional)]
    label: Option<&'static str>,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    let overlay_class = move || {
        let visibility = if is_open.get() {
            "opacity-100"
        } else {
            "opacity-0 pointer-events-none"
        };
        format!(
            "fixed inset-0 {z_index} flex items-center justify-center p-4 {backdrop} transition-opacity duration-300 {visibility}"
        )
    };

    view! {
        <div
            class=overlay_class
            role="dialog"
            aria-modal="true"
            aria-label=label
            aria-hidden=move || (!is_open.get()).to_string()
            // Keeps the controls of a hidden modal out of the tab order
            inert=move || !is_open.get()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        // Only clicks on the overlay itself, not bubbled from the card
                        if e.target() == e.current_target() {
                            on_close.run(());
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = (e, on_close);
                    }
                }
            }
        >
            <div class=format!("w-full {max_width} bg-white rounded-[2.5rem] overflow-hidden shadow-2xl")>
                {children()}
            </div>
        </div>
    }
}
