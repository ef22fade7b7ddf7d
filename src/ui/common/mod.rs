//! Common reusable UI components
//!
//! Building blocks shared by the page sections and the lead modals.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant, SubmitButton};
pub use form::FormField;
pub use modal::BaseModal;
