//! Settings dialog for editing the profile in place.
//!
//! The form opens locked. "Edit" unlocks every field and the save button;
//! saving locks it again. Cancel, like every other way of closing the dialog,
//! discards unsaved edits and relocks.

use leptos::prelude::*;

use crate::state::profile::{ProfileRecord, SkillCategory};
use crate::state::settings::{SAVE_LABEL, SettingsField, SettingsPanel, UploadStatus, persist_profile};
use crate::util::dom::set_scroll_locked;
use crate::util::storage::BrowserStorage;

#[component]
pub fn SettingsModal(panel: RwSignal<SettingsPanel>, open: RwSignal<bool>) -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileRecord>>();

    let close = move || {
        profile.with_untracked(|record| panel.update(|p| p.cancel(record)));
        open.set(false);
        set_scroll_locked(false);
    };

    #[cfg(feature = "csr")]
    {
        let _listener = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && open.get_untracked() {
                close();
            }
        });
    }

    let on_edit = move |_| {
        panel.update(SettingsPanel::begin_edit);
        #[cfg(feature = "csr")]
        request_animation_frame(|| crate::util::dom::focus_element(&SettingsField::Name.id()));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut saved = None;
        panel.update(|p| saved = Some(p.save()));
        let record = match saved {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                leptos::logging::warn!("settings save ignored: {e}");
                return;
            }
            None => return,
        };

        profile.set(record.clone());
        persist_profile(&BrowserStorage, &record);

        let status = UploadStatus::initial(&record);
        panel.update(|p| p.feedback = status.feedback());
        open.set(false);
        set_scroll_locked(false);

        #[cfg(feature = "csr")]
        if status == UploadStatus::Uploading {
            leptos::task::spawn_local(async move {
                use crate::net::http::BrowserTransport;
                use crate::state::settings::upload_profile;

                let result = upload_profile(&BrowserTransport, &record).await;
                panel.update(|p| p.feedback = result.feedback());
            });
        }
    };

    let scalar_fields = SettingsField::SCALARS.into_iter().map(|field| draft_field(field, panel)).collect_view();
    let skill_fields = SkillCategory::ALL
        .into_iter()
        .map(|category| draft_field(SettingsField::Skills(category), panel))
        .collect_view();

    view! {
        <div
            id="settings-modal"
            class="modal"
            aria-hidden=move || if open.get() { "false" } else { "true" }
            on:click=move |_| close()
        >
            <div class="modal-content settings-content" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <button type="button" class="modal-close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
                <h3>"Settings"</h3>
                <form id="settings-form" class="settings-form" on:submit=on_submit>
                    <div class="settings-grid">{scalar_fields}</div>
                    <h4>"Skills (one per line)"</h4>
                    <div class="settings-grid settings-grid--skills">{skill_fields}</div>
                    <div class="form-actions">
                        <button
                            id="settings-edit"
                            type="button"
                            class="btn btn--ghost"
                            disabled=move || !panel.with(SettingsPanel::edit_enabled)
                            on:click=on_edit
                        >
                            {move || panel.with(SettingsPanel::edit_label)}
                        </button>
                        <button
                            id="settings-save"
                            type="submit"
                            class="btn"
                            disabled=move || !panel.with(SettingsPanel::save_enabled)
                        >
                            {SAVE_LABEL}
                        </button>
                        <button
                            id="settings-cancel"
                            type="button"
                            class="btn btn--ghost"
                            on:click=move |_| close()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
        <p id="settings-feedback" class=move || panel.with(|p| p.feedback.class()) aria-live="polite">
            {move || panel.with(|p| p.feedback.text.clone())}
        </p>
    }
}

/// One labelled input bound to a draft field; disabled while locked.
fn draft_field(field: SettingsField, panel: RwSignal<SettingsPanel>) -> impl IntoView + use<> {
    let id = field.id();
    let value = move || panel.with(|p| p.draft.field(field).to_owned());
    let disabled = move || !panel.with(SettingsPanel::fields_enabled);
    let on_input = move |ev: leptos::ev::Event| panel.update(|p| p.draft.set_field(field, event_target_value(&ev)));

    let control = if field.multiline() {
        view! { <textarea id=id.clone() rows="3" prop:value=value prop:disabled=disabled on:input=on_input></textarea> }
            .into_any()
    } else {
        view! { <input id=id.clone() type="text" prop:value=value prop:disabled=disabled on:input=on_input/> }.into_any()
    };

    view! {
        <label class="settings-field" for=id>
            {field.label()}
            {control}
        </label>
    }
}
