//! WhatsApp deep link for the confirmed lead.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::core::config::SiteConfig;
use crate::core::lead::LeadDraft;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Pre-filled chat message: greeting to LocalBoss Marketing, the visitor's
/// name, where their car rental business is and a request for the free audit
pub fn lead_message(name: &str, area: &str) -> String {
    format!(
        "السلام علیکم لوکل باس مارکیٹنگ، میرا نام {name} ہے اور میرا کار رینٹل بزنس {area} میں ہے۔ میں اپنے بزنس کا فری آڈٹ کروانا چاہتا ہوں"
    )
}

/// Percent-encode with `encodeURIComponent` semantics
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT_SET).to_string()
}

/// `https://<host>/<number>?text=<encoded message>`
pub fn chat_link(config: &SiteConfig, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        config.whatsapp_host,
        config.whatsapp_number,
        encode_uri_component(message)
    )
}

/// Deep link pre-filled from the draft's name and area
pub fn lead_chat_link(config: &SiteConfig, draft: &LeadDraft) -> String {
    chat_link(config, &lead_message(&draft.name, &draft.area))
}

/// Decoded `text` parameter of a chat link, if any
#[cfg(test)]
pub(crate) fn decode_chat_text(link: &str) -> Option<String> {
    url::Url::parse(link)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
}
