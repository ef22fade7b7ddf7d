#[cfg(test)]
mod tests {
    use crate::core::{
        FlowError, FlowState, LeadCapture, LeadDraft, LeadField, LeadLog, LeadLogError,
        LeadRecord, LeadSource, SiteConfig, submit_lead, whatsapp::decode_chat_text,
    };
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 4, 5).unwrap()
    }

    /// Lead log that records the payload and then fails
    #[derive(Default, Clone)]
    struct UnreachableSheet {
        attempts: Rc<RefCell<Vec<String>>>,
    }

    impl LeadLog for UnreachableSheet {
        async fn record(&self, lead: &LeadRecord) -> Result<(), LeadLogError> {
            self.attempts.borrow_mut().push(lead.to_form_body());
            Err(LeadLogError::Request("Failed to fetch".to_string()))
        }
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Open(LeadSource),
        Close,
        FillValid,
        Submit,
        Confirm,
        Dismiss,
    }

    const STEPS: [Step; 8] = [
        Step::Open(LeadSource::Navbar),
        Step::Open(LeadSource::Hero),
        Step::Open(LeadSource::Footer),
        Step::Close,
        Step::FillValid,
        Step::Submit,
        Step::Confirm,
        Step::Dismiss,
    ];

    fn apply(capture: &mut LeadCapture, step: Step, config: &SiteConfig) {
        // Rejected events leave the state untouched, which is what we want here
        let _ = match step {
            Step::Open(source) => capture.open_form(source),
            Step::Close => capture.close_form(),
            Step::FillValid => capture
                .edit(LeadField::Name, "Ali")
                .and_then(|_| capture.edit(LeadField::Phone, "03001234567"))
                .and_then(|_| capture.edit(LeadField::Area, "DHA")),
            Step::Submit => capture.submit(config, now()).map(|_| ()),
            Step::Confirm => capture.confirm_redirect(config).map(|_| ()),
            Step::Dismiss => capture.dismiss_confirm(),
        };
    }

    fn filled(source: LeadSource) -> LeadCapture {
        let mut capture = LeadCapture::new();
        capture.open_form(source).unwrap();
        capture.edit(LeadField::Name, "Ali").unwrap();
        capture.edit(LeadField::Phone, "03001234567").unwrap();
        capture.edit(LeadField::Area, "DHA").unwrap();
        capture
    }

    /// Visit every sequence over `alphabet` of length `0..=len`
    fn for_each_sequence<T: Copy>(
        alphabet: &[T],
        len: usize,
        prefix: &mut Vec<T>,
        visit: &mut impl FnMut(&[T]),
    ) {
        visit(prefix.as_slice());
        if prefix.len() == len {
            return;
        }
        for &item in alphabet {
            prefix.push(item);
            for_each_sequence(alphabet, len, prefix, visit);
            prefix.pop();
        }
    }

    #[test]
    fn test_surfaces_are_mutually_exclusive_for_all_sequences() {
        let config = SiteConfig::default();
        let mut checked = 0usize;

        for_each_sequence(&STEPS, 5, &mut Vec::new(), &mut |steps| {
            let mut capture = LeadCapture::new();
            for step in steps {
                apply(&mut capture, *step, &config);
                let state = capture.state();
                assert!(
                    !(state.is_form_visible() && state.is_confirm_visible()),
                    "both surfaces visible after {steps:?}"
                );
            }
            checked += 1;
        });

        assert!(checked > 30_000);
    }

    #[derive(Debug, Clone, Copy)]
    enum DraftStep {
        Edit(LeadField, &'static str),
        Reopen,
    }

    const DRAFT_STEPS: [DraftStep; 7] = [
        DraftStep::Edit(LeadField::Name, "Ali"),
        DraftStep::Edit(LeadField::Name, "Ali Raza"),
        DraftStep::Edit(LeadField::Phone, "0300"),
        DraftStep::Edit(LeadField::Phone, "03001234567"),
        DraftStep::Edit(LeadField::Area, "DHA Phase 6"),
        DraftStep::Edit(LeadField::Area, ""),
        DraftStep::Reopen,
    ];

    #[test]
    fn test_draft_keeps_latest_value_per_field_for_all_sequences() {
        let mut checked = 0usize;

        for_each_sequence(&DRAFT_STEPS, 5, &mut Vec::new(), &mut |steps| {
            let mut capture = LeadCapture::new();
            capture.open_form(LeadSource::Hero).unwrap();
            let mut expected = LeadDraft::default();

            for step in steps {
                match *step {
                    DraftStep::Edit(field, value) => {
                        capture.edit(field, value).unwrap();
                        expected.set(field, value);
                    }
                    DraftStep::Reopen => {
                        capture.close_form().unwrap();
                        capture.open_form(LeadSource::Footer).unwrap();
                    }
                }
            }

            assert_eq!(capture.draft(), &expected, "after {steps:?}");
            checked += 1;
        });

        // 7^0 + 7^1 + ... + 7^5
        assert_eq!(checked, 19_608);
    }

    #[test]
    fn test_each_cta_attributes_its_lead() {
        let config = SiteConfig::default();

        for source in LeadSource::ALL {
            let mut capture = LeadCapture::new();
            capture.open_form(source).unwrap();
            capture.edit(LeadField::Name, "Ali").unwrap();
            capture.edit(LeadField::Phone, "03001234567").unwrap();
            capture.edit(LeadField::Area, "DHA").unwrap();

            let record = capture.submit(&config, now()).unwrap();

            assert_eq!(record.source, source);
            assert!(
                record
                    .to_form_body()
                    .contains(&format!("&Source={}&", source.as_str()))
            );
        }
    }

    #[tokio::test]
    async fn test_failed_logging_still_reaches_confirmation() {
        let sheet = UnreachableSheet::default();
        let mut capture = filled(LeadSource::Hero);

        let delivery =
            submit_lead(&mut capture, &SiteConfig::default(), now(), sheet.clone()).unwrap();

        // Confirmation is up before the request has even started
        assert_eq!(capture.state(), FlowState::ConfirmOpen);
        assert!(sheet.attempts.borrow().is_empty());

        let report = delivery.await;

        assert_eq!(report.source, LeadSource::Hero);
        assert_eq!(
            report.outcome,
            Err(LeadLogError::Request("Failed to fetch".to_string()))
        );
        assert_eq!(capture.state(), FlowState::ConfirmOpen);
        assert_eq!(sheet.attempts.borrow().len(), 1);
        assert!(sheet.attempts.borrow()[0].contains("Source=Hero"));
        assert!(sheet.attempts.borrow()[0].contains("Status=Form+Submitted"));
    }

    #[test]
    fn test_rejected_submit_schedules_no_delivery() {
        let sheet = UnreachableSheet::default();
        let mut capture = LeadCapture::new();
        capture.open_form(LeadSource::Navbar).unwrap();
        capture.edit(LeadField::Name, "Ali").unwrap();

        let result = submit_lead(&mut capture, &SiteConfig::default(), now(), sheet.clone());

        assert!(matches!(result, Err(FlowError::Validation(_))));
        assert_eq!(
            capture.state(),
            FlowState::FormOpen {
                source: LeadSource::Navbar
            }
        );
        assert!(sheet.attempts.borrow().is_empty());
    }

    #[test]
    fn test_full_cycle_redirects_and_resets() {
        let config = SiteConfig::default();
        let mut capture = LeadCapture::new();

        capture.open_form(LeadSource::Footer).unwrap();
        capture.edit(LeadField::Name, "Sara").unwrap();
        capture.edit(LeadField::Phone, "03331234567").unwrap();
        capture.edit(LeadField::Area, "Clifton").unwrap();
        capture.submit(&config, now()).unwrap();

        let link = capture.confirm_redirect(&config).unwrap();

        assert!(link.starts_with("https://wa.me/923703730897?text="));
        let text = decode_chat_text(&link).unwrap();
        assert!(text.contains("Sara") && text.contains("Clifton"));
        assert!(!text.contains("03331234567"));

        assert_eq!(capture.state(), FlowState::Idle);
        assert_eq!(capture.draft(), &LeadDraft::default());

        // A second visit through the same page starts from a clean form
        capture.open_form(LeadSource::Navbar).unwrap();
        assert!(capture.draft().is_empty());
    }
}
