//! Contact form validation and the delivery fallback ladder.
//!
//! DESIGN
//! ======
//! [`submit_contact`] runs the whole ladder and returns a [`ContactOutcome`]
//! describing what the page should do: the feedback to show, the `mailto:`
//! link to open (if any) and whether to clear the form. The component only
//! applies it, so every rung can be driven in tests with a scripted
//! transport and an in-memory store.
//!
//! Ladder:
//! 1. endpoint configured, 2xx response: sent
//! 2. endpoint configured, other status: mail client fallback
//! 3. endpoint configured, no response: mail client fallback
//! 4. no endpoint: mail client directly
//!
//! Every attempt that passes validation is appended to the sent-message log.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{SENT_MESSAGES_KEY, SiteConfig};
use crate::net::http::{JsonTransport, status_ok};
use crate::net::mailto::MailtoLink;
use crate::state::profile::ProfileStore;
use crate::state::ui::Feedback;
use crate::util::storage::{KeyValueStore, load_json, save_json};

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-.+]+@[A-Za-z0-9_-]+\.[A-Za-z]{2,}$"));

pub const SENDING_MESSAGE: &str = "Sending message...";
pub const SENT_MESSAGE: &str = "Thanks! Your message was sent. I will get back to you soon.";
pub const SERVER_FALLBACK_MESSAGE: &str = "Send failed (server). Opening mail client as fallback.";
pub const NETWORK_FALLBACK_MESSAGE: &str = "Send failed (network). Opening mail client as fallback.";
pub const MAILTO_MESSAGE: &str = "Opening your mail client...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in name, email and message.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_ok_and(|pattern| pattern.is_match(email))
}

/// Raw form input as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Trimmed, validated payload. Also the JSON body POSTed to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One control of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// `id` and `name` attribute of the control, also its key in the POST body.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Trim every field and check the required ones.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingFields`] when name, email or message is blank,
    /// [`ValidationError::InvalidEmail`] when the email does not look like one.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let submission = ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };
        if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&submission.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(submission)
    }
}

/// How a contact attempt was delivered, as recorded in the message log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    Sent,
    FailedServerFallbackMailto,
    FailedNetworkFallbackMailto,
    Mailto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// ISO-8601 time of the attempt.
    pub date: String,
    pub status: DeliveryStatus,
}

/// Append one entry to the persisted log. Failures are logged and dropped.
pub fn append_sent_message(store: &impl KeyValueStore, entry: SentMessage) {
    let mut log: Vec<SentMessage> = load_json(store, SENT_MESSAGES_KEY).unwrap_or_default();
    log.push(entry);
    if let Err(e) = save_json(store, SENT_MESSAGES_KEY, &log) {
        leptos::logging::warn!("sent-message log not persisted: {e}");
    }
}

/// What the page should do after a submission passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactOutcome {
    pub status: DeliveryStatus,
    pub feedback: Feedback,
    /// `mailto:` URI to navigate to.
    pub mailto: Option<String>,
    pub clear_form: bool,
}

/// Validate `form` and deliver it through the fallback ladder.
///
/// The endpoint comes from the persisted profile record in `store`; the
/// fallback recipient is the page owner's current address.
///
/// # Errors
///
/// Returns the validation error untouched. A rejected form causes no
/// request, no navigation and no log entry.
pub async fn submit_contact<S, T>(
    store: &S,
    transport: &T,
    config: &SiteConfig,
    recipient: &str,
    form: &ContactForm,
    sent_at: &str,
) -> Result<ContactOutcome, ValidationError>
where
    S: KeyValueStore,
    T: JsonTransport,
{
    let submission = form.validate()?;
    let endpoint = store.load_profile().and_then(|record| record.endpoint().map(str::to_owned));

    let mailto = || {
        MailtoLink::for_contact(
            recipient,
            config.mail_subject(&submission.subject),
            &submission.name,
            &submission.email,
            &submission.message,
        )
        .to_uri()
    };

    let outcome = match endpoint {
        Some(url) => match transport.post_json(&url, &submission).await {
            Ok(status) if status_ok(status) => ContactOutcome {
                status: DeliveryStatus::Sent,
                feedback: Feedback::success(SENT_MESSAGE),
                mailto: None,
                clear_form: true,
            },
            Ok(status) => {
                leptos::logging::warn!("contact endpoint answered {status}");
                ContactOutcome {
                    status: DeliveryStatus::FailedServerFallbackMailto,
                    feedback: Feedback::error(SERVER_FALLBACK_MESSAGE),
                    mailto: Some(mailto()),
                    clear_form: false,
                }
            }
            Err(e) => {
                leptos::logging::warn!("Send failed: {e}");
                ContactOutcome {
                    status: DeliveryStatus::FailedNetworkFallbackMailto,
                    feedback: Feedback::error(NETWORK_FALLBACK_MESSAGE),
                    mailto: Some(mailto()),
                    clear_form: false,
                }
            }
        },
        None => ContactOutcome {
            status: DeliveryStatus::Mailto,
            feedback: Feedback::neutral(MAILTO_MESSAGE),
            mailto: Some(mailto()),
            clear_form: true,
        },
    };

    append_sent_message(
        store,
        SentMessage {
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
            date: sent_at.to_owned(),
            status: outcome.status,
        },
    );

    Ok(outcome)
}
