//! Site configuration.
//!
//! The server builds it with `SiteConfig::from_env()` after calling
//! `dotenvy::dotenv()`, embeds it in the page shell as JSON and the browser
//! reads it back on hydration. Tests construct it directly.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Spreadsheet webhook that receives submitted leads
pub const DEFAULT_LEAD_LOG_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbypc9qzjJYQlCgdCG5M8qus0S-TB6ivD10fsJG8q47XlVzF9Jmz46CfilEaCrgwcz7j/exec";

/// Business WhatsApp number in international format, without `+`
pub const DEFAULT_WHATSAPP_NUMBER: &str = "923703730897";

pub const DEFAULT_WHATSAPP_HOST: &str = "wa.me";

pub const DEFAULT_BUSINESS_TYPE: &str = "Karachi Car Rental";

/// Vertical scroll offset (px) after which the nav switches to its solid style
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// DOM id of the `<script>` element carrying the serialized config
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Configuration errors raised while reading the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("LEAD_TIME_ZONE is not a known time zone: {0}")]
    InvalidTimeZone(String),

    #[error("SCROLL_THRESHOLD must be a non-negative number, got {0}")]
    InvalidScrollThreshold(String),

    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Everything the lead flow needs to know about the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Endpoint receiving the form-encoded lead POST
    pub lead_log_endpoint: String,

    /// Recipient of the WhatsApp deep link
    pub whatsapp_number: String,

    /// Host of the WhatsApp deep link, e.g. `wa.me`
    pub whatsapp_host: String,

    /// Value of the `Business_Type` column
    pub business_type: String,

    /// Zone used to format the `Date` column
    pub time_zone: Tz,

    pub scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lead_log_endpoint: DEFAULT_LEAD_LOG_ENDPOINT.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            whatsapp_host: DEFAULT_WHATSAPP_HOST.to_string(),
            business_type: DEFAULT_BUSINESS_TYPE.to_string(),
            time_zone: chrono_tz::Asia::Karachi,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their production default. Call
    /// `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let time_zone = match lookup("LEAD_TIME_ZONE") {
            Some(raw) => raw
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimeZone(raw))?,
            None => defaults.time_zone,
        };

        let scroll_threshold = match lookup("SCROLL_THRESHOLD") {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => value,
                _ => return Err(ConfigError::InvalidScrollThreshold(raw)),
            },
            None => defaults.scroll_threshold,
        };

        // A blank value would produce a link without recipient or a lead
        // posted nowhere, so it is an error rather than a fallback
        let text = |key: &'static str, default: String| match lookup(key) {
            Some(raw) if raw.trim().is_empty() => Err(ConfigError::Empty(key)),
            Some(raw) => Ok(raw.trim().to_string()),
            None => Ok(default),
        };

        Ok(Self {
            lead_log_endpoint: text("LEAD_LOG_ENDPOINT", defaults.lead_log_endpoint)?,
            whatsapp_number: text("WHATSAPP_NUMBER", defaults.whatsapp_number)?,
            whatsapp_host: text("WHATSAPP_HOST", defaults.whatsapp_host)?,
            business_type: text("BUSINESS_TYPE", defaults.business_type)?,
            time_zone,
            scroll_threshold,
        })
    }

    /// Host part of the lead endpoint, safe to print in logs
    pub fn lead_log_host(&self) -> &str {
        let without_scheme = self
            .lead_log_endpoint
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.lead_log_endpoint);
        without_scheme.split('/').next().unwrap_or_default()
    }

    /// Serialize for embedding in the page shell
    pub fn to_embedded_json(&self) -> String {
        // `</` would end the surrounding <script> element early
        serde_json::to_string(self)
            .unwrap_or_default()
            .replace("</", "<\\/")
    }

    /// Parse the JSON produced by [`SiteConfig::to_embedded_json`]
    pub fn from_embedded_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
