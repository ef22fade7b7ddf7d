//! LocalBoss Marketing - Karachi car rental landing page
//!
//! A single-page marketing site that captures "free business audit" leads,
//! logs them to a Google Sheet and hands the visitor over to WhatsApp,
//! built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::SiteConfig;
    use crate::core::config::CONFIG_ELEMENT_ID;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let embedded = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let config = match embedded.as_deref().map(SiteConfig::from_embedded_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            leptos::logging::error!("Invalid embedded site config, using defaults: {}", e);
            SiteConfig::default()
        }
        None => {
            leptos::logging::warn!("No embedded site config, using defaults");
            SiteConfig::default()
        }
    };

    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
