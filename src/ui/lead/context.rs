//! Lead flow context for the page
//!
//! Provides:
//! - LeadFlowContext, the reactive wrapper around `LeadCapture`
//! - the scroll listener driving the navigation style
//! - the side effects of the flow: the spreadsheet POST and the WhatsApp window

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    FlowError, LeadCapture, LeadField, LeadSource, LeadValidationError, SheetWebhook, SiteConfig,
    submit_lead,
};

/// Reactive lead flow state shared by the sections and both modals
#[derive(Clone, Copy)]
pub struct LeadFlowContext {
    /// Visible surface and draft
    pub capture: RwSignal<LeadCapture>,
    /// Whether the page is scrolled past the nav threshold
    pub scrolled: RwSignal<bool>,
    /// Last rejected submit, shown under the offending field
    pub form_error: RwSignal<Option<LeadValidationError>>,
    config: StoredValue<SiteConfig>,
}

impl LeadFlowContext {
    pub fn form_visible(&self) -> Signal<bool> {
        let capture = self.capture;
        Signal::derive(move || capture.with(|c| c.state().is_form_visible()))
    }

    pub fn confirm_visible(&self) -> Signal<bool> {
        let capture = self.capture;
        Signal::derive(move || capture.with(|c| c.state().is_confirm_visible()))
    }

    /// Current value of one draft field
    pub fn field(&self, field: LeadField) -> Signal<String> {
        let capture = self.capture;
        Signal::derive(move || capture.with(|c| c.draft().get(field).to_string()))
    }

    /// Validation message for one draft field
    pub fn field_error(&self, field: LeadField) -> Signal<Option<String>> {
        let form_error = self.form_error;
        Signal::derive(move || {
            form_error
                .get()
                .filter(|e| e.field() == field)
                .map(|e| e.to_string())
        })
    }

    pub fn open_form(&self, source: LeadSource) {
        self.form_error.set(None);
        self.apply(|c| c.open_form(source));
    }

    pub fn edit(&self, field: LeadField, value: String) {
        if self
            .form_error
            .with_untracked(|e| e.as_ref().is_some_and(|e| e.field() == field))
        {
            self.form_error.set(None);
        }
        self.apply(|c| c.edit(field, value));
    }

    pub fn close_form(&self) {
        self.apply(|c| c.close_form());
    }

    pub fn dismiss_confirm(&self) {
        self.apply(|c| c.dismiss_confirm());
    }

    /// Submit the form: move to the confirmation first, then log the lead
    /// in the background. The outcome of the log never reaches the visitor.
    pub fn submit(&self) {
        let config = self.config.get_value();
        let webhook = SheetWebhook::from_config(&config);
        let result = self
            .capture
            .try_update(|c| submit_lead(c, &config, Utc::now(), webhook));

        match result {
            Some(Ok(delivery)) => {
                self.form_error.set(None);
                spawn_local(async move {
                    delivery.await;
                });
            }
            Some(Err(FlowError::Validation(err))) => self.form_error.set(Some(err)),
            Some(Err(err)) => leptos::logging::warn!("Ignoring submit: {}", err),
            None => {}
        }
    }

    /// Open the pre-filled WhatsApp chat and reset the draft
    pub fn confirm_redirect(&self) {
        let config = self.config.get_value();
        match self.capture.try_update(|c| c.confirm_redirect(&config)) {
            Some(Ok(link)) => open_in_new_tab(&link),
            Some(Err(err)) => leptos::logging::warn!("Ignoring redirect: {}", err),
            None => {}
        }
    }

    fn apply(&self, event: impl FnOnce(&mut LeadCapture) -> Result<(), FlowError>) {
        if let Some(Err(err)) = self.capture.try_update(event) {
            leptos::logging::warn!("Ignoring page event: {}", err);
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn open_in_new_tab(url: &str) {
    match window().open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => leptos::logging::warn!("WhatsApp window was blocked by the browser"),
        Err(e) => leptos::logging::error!("Failed to open WhatsApp: {:?}", e),
    }
}

#[cfg(feature = "ssr")]
fn open_in_new_tab(_url: &str) {}

/// Provide the lead flow context to the page
pub fn provide_lead_flow_context(config: SiteConfig) -> LeadFlowContext {
    let scrolled = RwSignal::new(false);

    // Track the scroll offset for the navigation style
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::is_scrolled;
        use leptos::ev::scroll;

        let threshold = config.scroll_threshold;
        let handle_scroll = window_event_listener(scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            scrolled.set(is_scrolled(offset, threshold));
        });

        on_cleanup(move || handle_scroll.remove());
    }

    let ctx = LeadFlowContext {
        capture: RwSignal::new(LeadCapture::new()),
        scrolled,
        form_error: RwSignal::new(None),
        config: StoredValue::new(config),
    };

    provide_context(ctx);

    ctx
}

/// Use lead flow context from anywhere in the page
pub fn use_lead_flow_context() -> LeadFlowContext {
    use_context::<LeadFlowContext>().expect("LeadFlowContext should be provided")
}
