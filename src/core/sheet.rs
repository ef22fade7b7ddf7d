//! Best-effort delivery of leads to the spreadsheet webhook.
//!
//! The webhook is called from the browser with `no-cors`, so the response is
//! opaque: the only observable failure is the request itself erroring. A
//! failed delivery is logged and dropped, it never reaches the visitor and is
//! never retried.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::core::config::SiteConfig;
use crate::core::flow::{FlowError, LeadCapture};
use crate::core::lead::{LeadRecord, LeadSource};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadLogError {
    #[error("lead log request failed: {0}")]
    Request(String),

    #[error("lead log is only reachable from the browser")]
    Unavailable,
}

/// Destination for submitted leads
pub trait LeadLog {
    fn record(&self, lead: &LeadRecord) -> impl Future<Output = Result<(), LeadLogError>>;
}

/// Spreadsheet web app receiving form-encoded POSTs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetWebhook {
    endpoint: String,
}

impl SheetWebhook {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.lead_log_endpoint.clone())
    }

    #[cfg(test)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LeadLog for SheetWebhook {
    async fn record(&self, lead: &LeadRecord) -> Result<(), LeadLogError> {
        post_form(&self.endpoint, lead.to_form_body()).await
    }
}

#[cfg(feature = "hydrate")]
async fn post_form(endpoint: &str, body: String) -> Result<(), LeadLogError> {
    use gloo_net::http::Request;

    // Opaque response: only a transport error tells us anything
    Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .mode(web_sys::RequestMode::NoCors)
        .body(body)
        .map_err(|e| LeadLogError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| LeadLogError::Request(e.to_string()))?;

    Ok(())
}

/// Server stub - leads are only ever submitted from the hydrated page
#[cfg(not(feature = "hydrate"))]
async fn post_form(_endpoint: &str, _body: String) -> Result<(), LeadLogError> {
    Err(LeadLogError::Unavailable)
}

/// What happened to one dispatched lead. Inspected for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub source: LeadSource,
    pub outcome: Result<(), LeadLogError>,
}

impl DeliveryReport {
    #[cfg(test)]
    pub fn delivered(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Hand `lead` to `log`, swallowing any failure after logging it
pub async fn dispatch_lead<L: LeadLog>(log: &L, lead: &LeadRecord) -> DeliveryReport {
    let outcome = log.record(lead).await;

    match &outcome {
        Ok(()) => leptos::logging::log!("Lead from {} sent to sheet", lead.source),
        Err(e) => leptos::logging::warn!("Sheet logging failed for {} lead: {}", lead.source, e),
    }

    DeliveryReport {
        source: lead.source,
        outcome,
    }
}

/// Submit the form and prepare the delivery of the resulting lead.
///
/// The transition to the confirmation is committed before this returns; the
/// returned future only performs the delivery and is meant to be spawned.
/// Nothing it does can move the flow back.
pub fn submit_lead<L: LeadLog>(
    capture: &mut LeadCapture,
    config: &SiteConfig,
    now: DateTime<Utc>,
    log: L,
) -> Result<impl Future<Output = DeliveryReport> + use<L>, FlowError> {
    let record = capture.submit(config, now)?;
    Ok(async move { dispatch_lead(&log, &record).await })
}
