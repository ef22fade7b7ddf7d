//! Lead capture domain: configuration, lead records, the page flow and its
//! two outbound interfaces (spreadsheet log and WhatsApp link)

pub mod config;
pub mod flow;
pub mod lead;
pub mod scroll;
pub mod sheet;
#[cfg(test)]
mod tests;
pub mod whatsapp;

pub use config::{ConfigError, SiteConfig};
pub use flow::{FlowError, FlowEvent, FlowState, LeadCapture};
pub use lead::{LeadDraft, LeadField, LeadRecord, LeadSource, LeadValidationError};
pub use scroll::is_scrolled;
pub use sheet::{DeliveryReport, LeadLog, LeadLogError, SheetWebhook, dispatch_lead, submit_lead};
pub use whatsapp::{lead_chat_link, lead_message};
