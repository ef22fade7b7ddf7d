//! Lead draft, attribution tags and the record sent to the spreadsheet.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::core::config::SiteConfig;

/// Value of the `Status` column for every lead logged by the page
pub const STATUS_FORM_SUBMITTED: &str = "Form Submitted";

/// Required length of a mobile number, e.g. `03001234567`
pub const PHONE_DIGITS: usize = 11;

/// HTML `pattern` attribute of the phone input, kept in step with [`is_valid_phone`]
pub const PHONE_PATTERN: &str = "[0-9]{11}";

/// Call-to-action that opened the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum LeadSource {
    Navbar,
    Hero,
    Footer,
}

impl LeadSource {
    pub const ALL: [LeadSource; 3] = [LeadSource::Navbar, LeadSource::Hero, LeadSource::Footer];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Navbar => "Navbar",
            LeadSource::Hero => "Hero",
            LeadSource::Footer => "Footer",
        }
    }
}

/// Editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Phone,
    Area,
}

/// Reasons a draft cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("Please enter your full name")]
    EmptyName,

    #[error("Please enter your WhatsApp number")]
    EmptyPhone,

    #[error("Please enter your 11-digit mobile number (e.g., 03001234567)")]
    InvalidPhone,

    #[error("Please enter your area in Karachi")]
    EmptyArea,
}

impl LeadValidationError {
    /// Field the error should be displayed under
    pub fn field(&self) -> LeadField {
        match self {
            LeadValidationError::EmptyName => LeadField::Name,
            LeadValidationError::EmptyPhone | LeadValidationError::InvalidPhone => LeadField::Phone,
            LeadValidationError::EmptyArea => LeadField::Area,
        }
    }
}

/// In-progress form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub area: String,
}

impl LeadDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            area: area.into(),
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Phone => &self.phone,
            LeadField::Area => &self.area,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Phone => self.phone = value,
            LeadField::Area => self.area = value,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.area.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the draft the same way the form inputs do.
    ///
    /// Name and area must contain something other than whitespace, the phone
    /// must be exactly [`PHONE_DIGITS`] ASCII digits. The first failing field
    /// in form order is reported.
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        if self.name.trim().is_empty() {
            return Err(LeadValidationError::EmptyName);
        }

        if self.phone.is_empty() {
            return Err(LeadValidationError::EmptyPhone);
        }
        if !is_valid_phone(&self.phone) {
            return Err(LeadValidationError::InvalidPhone);
        }

        if self.area.trim().is_empty() {
            return Err(LeadValidationError::EmptyArea);
        }

        Ok(())
    }
}

/// Whether `phone` matches the `[0-9]{11}` input pattern
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Row appended to the lead spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub date: String,
    pub name: String,
    pub phone: String,
    pub area: String,
    pub source: LeadSource,
    pub business_type: String,
    pub status: String,
}

impl LeadRecord {
    /// Package a validated draft
    pub fn from_draft(
        draft: &LeadDraft,
        source: LeadSource,
        config: &SiteConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            date: format_local_timestamp(now, config.time_zone),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            area: draft.area.clone(),
            source,
            business_type: config.business_type.clone(),
            status: STATUS_FORM_SUBMITTED.to_string(),
        }
    }

    /// Spreadsheet columns in the order the webhook expects
    pub fn form_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Date", &self.date),
            ("Name", &self.name),
            ("Phone", &self.phone),
            ("Area", &self.area),
            ("Source", self.source.as_str()),
            ("Business_Type", &self.business_type),
            ("Status", &self.status),
        ]
    }

    /// `application/x-www-form-urlencoded` request body
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.form_fields())
            .finish()
    }
}

/// Format `now` the way an `en-PK` browser locale prints a date and time,
/// e.g. `19/10/2026, 3:04:05 pm`
pub fn format_local_timestamp(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz)
        .format("%d/%m/%Y, %-I:%M:%S %P")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        // 10:04:05 UTC is 15:04:05 in Karachi
        Utc.with_ymd_and_hms(2026, 10, 19, 10, 4, 5).unwrap()
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(LeadSource::Navbar.as_str(), "Navbar");
        assert_eq!(LeadSource::Hero.as_str(), "Hero");
        assert_eq!(LeadSource::Footer.as_str(), "Footer");

        for source in LeadSource::ALL {
            assert_eq!(source.to_string(), source.as_str());
        }
    }

    #[test]
    fn test_draft_set_and_get() {
        let mut draft = LeadDraft::default();
        assert!(draft.is_empty());

        draft.set(LeadField::Area, "Gulshan");
        draft.set(LeadField::Name, "Ahmed");
        draft.set(LeadField::Phone, "03001234567");

        assert_eq!(draft.get(LeadField::Name), "Ahmed");
        assert_eq!(draft.get(LeadField::Phone), "03001234567");
        assert_eq!(draft.get(LeadField::Area), "Gulshan");
        assert!(!draft.is_empty());

        draft.clear();
        assert_eq!(draft, LeadDraft::default());
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let draft = LeadDraft::new("Ali", "03001234567", "DHA");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_failing_field() {
        assert_eq!(
            LeadDraft::new("", "", "").validate(),
            Err(LeadValidationError::EmptyName)
        );
        assert_eq!(
            LeadDraft::new("   ", "03001234567", "DHA").validate(),
            Err(LeadValidationError::EmptyName)
        );
        assert_eq!(
            LeadDraft::new("Ali", "", "").validate(),
            Err(LeadValidationError::EmptyPhone)
        );
        assert_eq!(
            LeadDraft::new("Ali", "03001234567", " ").validate(),
            Err(LeadValidationError::EmptyArea)
        );
    }

    #[test]
    fn test_phone_pattern_attribute_matches_digit_count() {
        assert_eq!(PHONE_PATTERN, format!("[0-9]{{{PHONE_DIGITS}}}"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("03001234567"));
        assert!(!is_valid_phone("0300123456"));
        assert!(!is_valid_phone("030012345678"));
        assert!(!is_valid_phone("0300-123456"));
        assert!(!is_valid_phone("+9230012345"));
        // Non-ASCII digits do not satisfy [0-9]
        assert!(!is_valid_phone("٠٣٠٠١٢٣٤٥٦٧"));

        assert_eq!(
            LeadDraft::new("Ali", "0300 1234567", "DHA").validate(),
            Err(LeadValidationError::InvalidPhone)
        );
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(LeadValidationError::EmptyName.field(), LeadField::Name);
        assert_eq!(LeadValidationError::EmptyPhone.field(), LeadField::Phone);
        assert_eq!(LeadValidationError::InvalidPhone.field(), LeadField::Phone);
        assert_eq!(LeadValidationError::EmptyArea.field(), LeadField::Area);
    }

    #[test]
    fn test_local_timestamp_format() {
        let formatted = format_local_timestamp(fixed_instant(), chrono_tz::Asia::Karachi);
        assert_eq!(formatted, "19/10/2026, 3:04:05 pm");

        let morning = Utc.with_ymd_and_hms(2026, 1, 2, 2, 30, 0).unwrap();
        assert_eq!(
            format_local_timestamp(morning, chrono_tz::Asia::Karachi),
            "02/01/2026, 7:30:00 am"
        );
    }

    #[test]
    fn test_record_from_draft() {
        let config = SiteConfig::default();
        let draft = LeadDraft::new("Ali", "03001234567", "DHA");

        let record = LeadRecord::from_draft(&draft, LeadSource::Hero, &config, fixed_instant());

        assert_eq!(record.date, "19/10/2026, 3:04:05 pm");
        assert_eq!(record.name, "Ali");
        assert_eq!(record.phone, "03001234567");
        assert_eq!(record.area, "DHA");
        assert_eq!(record.source, LeadSource::Hero);
        assert_eq!(record.business_type, "Karachi Car Rental");
        assert_eq!(record.status, "Form Submitted");
    }

    #[test]
    fn test_form_fields_keys_and_order() {
        let record = LeadRecord::from_draft(
            &LeadDraft::new("Ali", "03001234567", "DHA"),
            LeadSource::Footer,
            &SiteConfig::default(),
            fixed_instant(),
        );

        let keys: Vec<&str> = record.form_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["Date", "Name", "Phone", "Area", "Source", "Business_Type", "Status"]
        );
        assert_eq!(record.form_fields()[4].1, "Footer");
    }

    #[test]
    fn test_form_body_encoding() {
        let record = LeadRecord::from_draft(
            &LeadDraft::new("Muhammad Ahmed", "03001234567", "DHA Phase 6 / Gulshan"),
            LeadSource::Navbar,
            &SiteConfig::default(),
            fixed_instant(),
        );

        assert_eq!(
            record.to_form_body(),
            "Date=19%2F10%2F2026%2C+3%3A04%3A05+pm\
             &Name=Muhammad+Ahmed\
             &Phone=03001234567\
             &Area=DHA+Phase+6+%2F+Gulshan\
             &Source=Navbar\
             &Business_Type=Karachi+Car+Rental\
             &Status=Form+Submitted"
        );
    }

    #[test]
    fn test_form_body_escapes_reserved_and_unicode() {
        let record = LeadRecord::from_draft(
            &LeadDraft::new("a&b=c+d", "03001234567", "کلفٹن"),
            LeadSource::Hero,
            &SiteConfig::default(),
            fixed_instant(),
        );
        let body = record.to_form_body();

        assert!(body.contains("&Name=a%26b%3Dc%2Bd&"));
        assert!(body.contains("&Area=%DA%A9%D9%84%D9%81%D9%B9%D9%86&"));

        // What the spreadsheet script sees after decoding
        let decoded: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded[1], ("Name".to_string(), "a&b=c+d".to_string()));
        assert_eq!(decoded[3], ("Area".to_string(), "کلفٹن".to_string()));
        assert_eq!(decoded.len(), 7);
    }
}
