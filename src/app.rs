use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::core::SiteConfig;
use crate::core::config::CONFIG_ELEMENT_ID;
use crate::ui::{LandingPage, provide_lead_flow_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // The server provides the config per request; hydrate() reads it back
    // from this script tag.
    let config = use_context::<SiteConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="ur" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script
                    type="application/json"
                    id=CONFIG_ELEMENT_ID
                    inner_html=config.to_embedded_json()
                ></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = use_context::<SiteConfig>().unwrap_or_default();
    provide_lead_flow_context(config);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/localboss.css"/>

        <LandingPage />
    }
}
