pub mod common;
pub mod icon;
pub mod lead;
pub mod pages;

pub use icon::{Icon, icons};
pub use lead::{LeadFlowContext, provide_lead_flow_context, use_lead_flow_context};
pub use pages::LandingPage;
