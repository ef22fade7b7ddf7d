//! Lead capture UI: the shared flow context and the two modals it drives

mod confirm_modal;
mod context;
mod form_modal;

pub use confirm_modal::WhatsAppConfirmModal;
pub use context::{LeadFlowContext, provide_lead_flow_context, use_lead_flow_context};
pub use form_modal::LeadFormModal;
