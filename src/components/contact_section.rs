//! Contact section: owner's address plus the message form.
//!
//! Validation runs synchronously so errors show immediately. A valid form is
//! handed to [`submit_contact`](crate::state::contact::submit_contact) and the
//! returned outcome is applied: feedback, optional mail-client navigation,
//! optional reset.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::contact::{ContactField, ContactForm, SENDING_MESSAGE};
use crate::state::profile::ProfileRecord;
use crate::state::ui::Feedback;

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileRecord>>();
    let config = StoredValue::new(expect_context::<SiteConfig>());

    let form = RwSignal::new(ContactForm::default());
    let feedback = RwSignal::new(Feedback::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            feedback.set(Feedback::error(e.to_string()));
            return;
        }
        feedback.set(Feedback::neutral(SENDING_MESSAGE));
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::net::http::BrowserTransport;
            use crate::state::contact::submit_contact;
            use crate::util::dom::{navigate, now_iso};
            use crate::util::storage::BrowserStorage;

            let recipient = profile.with_untracked(|p| p.email.clone());
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                match submit_contact(&BrowserStorage, &BrowserTransport, &config, &recipient, &current, &now_iso())
                    .await
                {
                    Ok(outcome) => {
                        if let Some(uri) = &outcome.mailto {
                            navigate(uri);
                        }
                        if outcome.clear_form {
                            form.set(ContactForm::default());
                        }
                        feedback.set(outcome.feedback);
                    }
                    Err(e) => feedback.set(Feedback::error(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _unused = (current, config);
            busy.set(false);
        }
    };

    let on_clear = move |_| {
        form.set(ContactForm::default());
        feedback.set(Feedback::default());
    };

    let fields = ContactField::ALL.into_iter().map(|field| form_field(field, form)).collect_view();

    view! {
        <section id="contact" class="section">
            <h2>"Contact"</h2>
            <p class="contact-intro">
                "Reach me at "
                <a id="contact-email" href=move || profile.with(|p| format!("mailto:{}", p.email))>
                    {move || profile.with(|p| p.email.clone())}
                </a>
                " or use the form below."
            </p>
            <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                {fields}
                <div class="form-actions">
                    <button type="submit" class="btn" disabled=move || busy.get()>
                        "Send"
                    </button>
                    <button id="form-clear" type="button" class="btn btn--ghost" on:click=on_clear>
                        "Clear"
                    </button>
                </div>
                <p id="form-feedback" class=move || feedback.with(Feedback::class) aria-live="polite">
                    {move || feedback.with(|f| f.text.clone())}
                </p>
            </form>
        </section>
    }
}

/// Labelled control bound to one form field, carrying matching `id` and `name`.
fn form_field(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView + use<> {
    let value = move || form.with(|f| f.value(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = if field == ContactField::Message {
        view! { <textarea id=field.attr() name=field.attr() rows="5" prop:value=value on:input=on_input></textarea> }
            .into_any()
    } else {
        view! {
            <input id=field.attr() name=field.attr() type=field.input_type() prop:value=value on:input=on_input/>
        }
        .into_any()
    };

    view! {
        <label>
            {field.label()}
            {control}
        </label>
    }
}
