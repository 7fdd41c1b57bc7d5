//! `mailto:` links for the contact fallback.
//!
//! Each component is escaped the way `encodeURIComponent` does it, so mail
//! clients see the same link a plain script would have produced.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    /// Prefilled message from a contact-form visitor.
    #[must_use]
    pub fn for_contact(recipient: &str, subject: &str, name: &str, email: &str, message: &str) -> Self {
        Self {
            recipient: recipient.trim().to_owned(),
            subject: subject.to_owned(),
            body: format!("Name: {name}\nEmail: {email}\n\n{message}"),
        }
    }

    #[must_use]
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            encode_component(&self.recipient),
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}
