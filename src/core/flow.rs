//! Lead capture state machine
//!
//! Provides:
//! - FlowState, the single visible surface (nothing, lead form, WhatsApp confirmation)
//! - LeadCapture, owning the draft and applying the page events to it
//!
//! The machine is pure: it never performs I/O. `submit` hands back the record
//! to log and `confirm_redirect` hands back the link to open, the caller does
//! the rest.

use chrono::{DateTime, Utc};
use derive_more::Display;

use crate::core::config::SiteConfig;
use crate::core::lead::{LeadDraft, LeadField, LeadRecord, LeadSource, LeadValidationError};
use crate::core::whatsapp::lead_chat_link;

/// Which modal, if any, is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    FormOpen {
        source: LeadSource,
    },
    ConfirmOpen,
}

impl FlowState {
    pub fn is_form_visible(&self) -> bool {
        matches!(self, FlowState::FormOpen { .. })
    }

    pub fn is_confirm_visible(&self) -> bool {
        matches!(self, FlowState::ConfirmOpen)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Idle => "Idle",
            FlowState::FormOpen { .. } => "FormOpen",
            FlowState::ConfirmOpen => "ConfirmOpen",
        }
    }
}

/// Page events driving the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FlowEvent {
    #[display("open form from {_0}")]
    OpenForm(LeadSource),
    #[display("edit the form")]
    Edit,
    #[display("close form")]
    CloseForm,
    #[display("submit")]
    Submit,
    #[display("confirm redirect")]
    ConfirmRedirect,
    #[display("dismiss confirmation")]
    DismissConfirm,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("cannot {event} while {from}")]
    InvalidTransition { from: &'static str, event: FlowEvent },

    #[error(transparent)]
    Validation(#[from] LeadValidationError),
}

/// Page-local lead capture state: the visible surface plus the draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadCapture {
    state: FlowState,
    draft: LeadDraft,
}

impl LeadCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    /// Source of the currently open form
    #[cfg(test)]
    pub fn pending_source(&self) -> Option<LeadSource> {
        match self.state {
            FlowState::FormOpen { source } => Some(source),
            _ => None,
        }
    }

    fn reject(&self, event: FlowEvent) -> FlowError {
        FlowError::InvalidTransition {
            from: self.state.name(),
            event,
        }
    }

    /// `Idle -> FormOpen`, tagging the lead with the call-to-action
    pub fn open_form(&mut self, source: LeadSource) -> Result<(), FlowError> {
        match self.state {
            FlowState::Idle => {
                self.state = FlowState::FormOpen { source };
                Ok(())
            }
            _ => Err(self.reject(FlowEvent::OpenForm(source))),
        }
    }

    /// Field edits are only accepted while the form is visible
    pub fn edit(&mut self, field: LeadField, value: impl Into<String>) -> Result<(), FlowError> {
        if !self.state.is_form_visible() {
            return Err(self.reject(FlowEvent::Edit));
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// `FormOpen -> Idle`; the draft survives for the next opening
    pub fn close_form(&mut self) -> Result<(), FlowError> {
        if !self.state.is_form_visible() {
            return Err(self.reject(FlowEvent::CloseForm));
        }
        self.state = FlowState::Idle;
        Ok(())
    }

    /// `FormOpen -> ConfirmOpen`.
    ///
    /// Returns the record to hand to the lead log. The transition does not
    /// depend on what happens to that record afterwards. A draft that fails
    /// validation leaves the form open.
    pub fn submit(
        &mut self,
        config: &SiteConfig,
        now: DateTime<Utc>,
    ) -> Result<LeadRecord, FlowError> {
        let FlowState::FormOpen { source } = self.state else {
            return Err(self.reject(FlowEvent::Submit));
        };

        self.draft.validate()?;

        let record = LeadRecord::from_draft(&self.draft, source, config, now);
        self.state = FlowState::ConfirmOpen;
        Ok(record)
    }

    /// `ConfirmOpen -> Idle`, returning the WhatsApp link to open.
    ///
    /// The draft is cleared once the link has been built.
    pub fn confirm_redirect(&mut self, config: &SiteConfig) -> Result<String, FlowError> {
        if !self.state.is_confirm_visible() {
            return Err(self.reject(FlowEvent::ConfirmRedirect));
        }

        let link = lead_chat_link(config, &self.draft);
        self.state = FlowState::Idle;
        self.draft.clear();
        Ok(link)
    }

    /// `ConfirmOpen -> Idle` without redirecting; the draft is kept
    pub fn dismiss_confirm(&mut self) -> Result<(), FlowError> {
        if !self.state.is_confirm_visible() {
            return Err(self.reject(FlowEvent::DismissConfirm));
        }
        self.state = FlowState::Idle;
        Ok(())
    }
}
