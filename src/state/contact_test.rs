use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::http::TransportError;
use crate::state::profile::ProfileRecord;
use crate::util::storage::MemoryStorage;

/// Transport that answers every POST with a fixed result and records calls.
struct ScriptedTransport {
    reply: Result<u16, TransportError>,
    calls: RefCell<Vec<(String, serde_json::Value)>>,
}

impl ScriptedTransport {
    fn answering(reply: Result<u16, TransportError>) -> Self {
        Self { reply, calls: RefCell::new(Vec::new()) }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl JsonTransport for ScriptedTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Request(e.to_string()))?;
        self.calls.borrow_mut().push((url.to_owned(), body));
        self.reply.clone()
    }
}

fn sent_messages(store: &MemoryStorage) -> Vec<SentMessage> {
    load_json(store, SENT_MESSAGES_KEY).unwrap_or_default()
}

fn valid_form() -> ContactForm {
    ContactForm {
        name: "  Sam  ".to_owned(),
        email: "sam@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: " Loved the portfolio. ".to_owned(),
    }
}

fn store_with_endpoint(endpoint: Option<&str>) -> MemoryStorage {
    let store = MemoryStorage::new();
    let record = ProfileRecord {
        email: "owner@site.dev".to_owned(),
        endpoint: endpoint.map(str::to_owned),
        ..ProfileRecord::default()
    };
    assert!(store.save_profile(&record).is_ok());
    store
}

fn submit(store: &MemoryStorage, transport: &ScriptedTransport, form: &ContactForm) -> Result<ContactOutcome, ValidationError> {
    block_on(submit_contact(
        store,
        transport,
        &SiteConfig::default(),
        "owner@site.dev",
        form,
        "2026-01-02T03:04:05.000Z",
    ))
}

// =============================================================
// Validation
// =============================================================

#[test]
fn email_pattern_accepts_common_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@mail-host.io"));
    assert!(is_valid_email("under_score@host.museum"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("one@letter.c"));
    assert!(!is_valid_email("digits@host.c0m"));
    assert!(!is_valid_email("@host.com"));
    assert!(!is_valid_email("sub@domain.co.uk"));
    assert!(!is_valid_email("space in@host.com"));
}

#[test]
fn validate_trims_fields() {
    let submission = valid_form().validate().unwrap();
    assert_eq!(submission.name, "Sam");
    assert_eq!(submission.message, "Loved the portfolio.");
}

#[test]
fn blank_required_fields_are_rejected() {
    for blank in ["name", "email", "message"] {
        let mut form = valid_form();
        match blank {
            "name" => form.name = "   ".to_owned(),
            "email" => form.email = String::new(),
            _ => form.message = "\n\t".to_owned(),
        }
        assert_eq!(form.validate(), Err(ValidationError::MissingFields), "blank {blank}");
    }
}

#[test]
fn subject_is_optional() {
    let mut form = valid_form();
    form.subject = String::new();
    assert!(form.validate().is_ok());
}

#[test]
fn validation_errors_carry_user_messages() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in name, email and message.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
}

// =============================================================
// Fallback ladder
// =============================================================

#[test]
fn invalid_form_has_no_side_effects() {
    let store = store_with_endpoint(Some("https://hook.test/contact"));
    let transport = ScriptedTransport::answering(Ok(200));
    let mut form = valid_form();
    form.email = "not-an-email".to_owned();

    assert_eq!(submit(&store, &transport, &form), Err(ValidationError::InvalidEmail));
    assert_eq!(transport.call_count(), 0);
    assert!(sent_messages(&store).is_empty());
}

#[test]
fn endpoint_ok_reports_sent_and_clears_form() {
    let store = store_with_endpoint(Some("https://hook.test/contact"));
    let transport = ScriptedTransport::answering(Ok(200));

    let outcome = submit(&store, &transport, &valid_form()).unwrap();

    assert_eq!(outcome.status, DeliveryStatus::Sent);
    assert_eq!(outcome.feedback, Feedback::success(SENT_MESSAGE));
    assert_eq!(outcome.mailto, None);
    assert!(outcome.clear_form);

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://hook.test/contact");
    assert_eq!(
        calls[0].1,
        serde_json::json!({
            "name": "Sam",
            "email": "sam@example.com",
            "subject": "Hello",
            "message": "Loved the portfolio."
        })
    );

    let log = sent_messages(&store);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].status, DeliveryStatus::Sent);
    assert_eq!(log[0].date, "2026-01-02T03:04:05.000Z");
}

#[test]
fn endpoint_server_error_falls_back_to_mailto() {
    let store = store_with_endpoint(Some("https://hook.test/contact"));
    let transport = ScriptedTransport::answering(Ok(500));

    let outcome = submit(&store, &transport, &valid_form()).unwrap();

    assert_eq!(outcome.status, DeliveryStatus::FailedServerFallbackMailto);
    assert_eq!(outcome.feedback, Feedback::error(SERVER_FALLBACK_MESSAGE));
    assert!(!outcome.clear_form);
    let mailto = outcome.mailto.unwrap();
    assert!(mailto.starts_with("mailto:owner%40site.dev?subject=Hello&body="));
    assert_eq!(sent_messages(&store)[0].status, DeliveryStatus::FailedServerFallbackMailto);
}

#[test]
fn network_error_falls_back_to_mailto() {
    let store = store_with_endpoint(Some("https://hook.test/contact"));
    let transport = ScriptedTransport::answering(Err(TransportError::Network("offline".to_owned())));

    let outcome = submit(&store, &transport, &valid_form()).unwrap();

    assert_eq!(outcome.status, DeliveryStatus::FailedNetworkFallbackMailto);
    assert_eq!(outcome.feedback, Feedback::error(NETWORK_FALLBACK_MESSAGE));
    assert!(outcome.mailto.is_some());
    assert_eq!(sent_messages(&store)[0].status, DeliveryStatus::FailedNetworkFallbackMailto);
}

#[test]
fn no_endpoint_opens_mail_client_without_request() {
    let store = store_with_endpoint(None);
    let transport = ScriptedTransport::answering(Ok(200));
    let mut form = valid_form();
    form.subject = String::new();

    let outcome = submit(&store, &transport, &form).unwrap();

    assert_eq!(transport.call_count(), 0);
    assert_eq!(outcome.status, DeliveryStatus::Mailto);
    assert_eq!(outcome.feedback, Feedback::neutral(MAILTO_MESSAGE));
    assert!(outcome.clear_form);
    let mailto = outcome.mailto.unwrap();
    assert!(mailto.contains("subject=Contact%20from%20portfolio"));
    assert_eq!(sent_messages(&store)[0].status, DeliveryStatus::Mailto);
}

#[test]
fn blank_endpoint_is_treated_as_absent() {
    let store = store_with_endpoint(Some("   "));
    let transport = ScriptedTransport::answering(Ok(200));

    let outcome = submit(&store, &transport, &valid_form()).unwrap();

    assert_eq!(transport.call_count(), 0);
    assert_eq!(outcome.status, DeliveryStatus::Mailto);
}

#[test]
fn log_is_append_only_across_attempts() {
    let store = store_with_endpoint(None);
    let transport = ScriptedTransport::answering(Ok(200));

    assert!(submit(&store, &transport, &valid_form()).is_ok());
    assert!(submit(&store, &transport, &valid_form()).is_ok());

    assert_eq!(sent_messages(&store).len(), 2);
}

#[test]
fn unwritable_log_does_not_change_outcome() {
    let store = MemoryStorage::read_only();
    let transport = ScriptedTransport::answering(Ok(200));

    let outcome = submit(&store, &transport, &valid_form()).unwrap();

    assert_eq!(outcome.status, DeliveryStatus::Mailto);
    assert!(sent_messages(&store).is_empty());
}

#[test]
fn delivery_status_serializes_as_log_tags() {
    let tags = [
        (DeliveryStatus::Sent, "sent"),
        (DeliveryStatus::FailedServerFallbackMailto, "failed-server-fallback-mailto"),
        (DeliveryStatus::FailedNetworkFallbackMailto, "failed-network-fallback-mailto"),
        (DeliveryStatus::Mailto, "mailto"),
    ];
    for (status, tag) in tags {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(tag));
    }
}

#[test]
fn field_attributes_match_post_body_keys() {
    let mut form = ContactForm::default();
    for field in ContactField::ALL {
        form.set(field, format!("{} value", field.attr()));
    }
    form.set(ContactField::Email, "sam@example.com".to_owned());
    let body = serde_json::to_value(form.validate().unwrap()).unwrap();
    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    let mut attrs: Vec<&str> = ContactField::ALL.iter().map(|f| f.attr()).collect();
    keys.sort_unstable();
    attrs.sort_unstable();
    assert_eq!(keys, attrs);
    assert_eq!(form.value(ContactField::Subject), "subject value");
}
