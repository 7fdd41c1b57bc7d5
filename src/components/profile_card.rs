//! Profile card: avatar, name, role, bio, copy-email and CV download.

use leptos::prelude::*;

use crate::config::{COPY_LABEL_RESET_MS, DOWNLOAD_LABEL_RESET_MS, SiteConfig};
use crate::state::profile::ProfileRecord;
use crate::state::ui::TransientLabel;
use crate::util::dom::flash_label;

const COPY_LABEL: &str = "Copy Email";
const COPIED_LABEL: &str = "Copied ✓";
pub const DOWNLOADING_LABEL: &str = "Downloading...";

#[component]
pub fn ProfileCard(#[prop(into)] cv_href: String) -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileRecord>>();
    let config = expect_context::<SiteConfig>();

    let avatar_config = config.clone();
    let avatar_src = move || profile.with(|p| avatar_config.resolve_avatar(&p.avatar));
    let copy_email = move || {
        profile.with(|p| if p.email.trim().is_empty() { config.fallback_copy_email.clone() } else { p.email.clone() })
    };

    let copy_label = RwSignal::new(TransientLabel::new(COPY_LABEL));
    let download_label = RwSignal::new(TransientLabel::new("Download CV"));

    let on_copy = {
        let copy_email = copy_email.clone();
        move |_| {
            let email = copy_email();
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                use crate::util::clipboard::{alert, copy_failed_message, copy_text};

                if copy_text(&email).await.copied() {
                    flash_label(copy_label, COPIED_LABEL, COPY_LABEL_RESET_MS);
                } else {
                    alert(&copy_failed_message(&email));
                }
            });
            #[cfg(not(feature = "csr"))]
            {
                let _email = email;
            }
        }
    };

    view! {
        <div class="profile-card">
            <div class="avatar">
                <img src=avatar_src alt=move || profile.with(|p| p.name.clone())/>
            </div>
            <div class="profile-body">
                <h3>{move || profile.with(|p| p.name.clone())}</h3>
                <p class="role">{move || profile.with(|p| p.role.clone())}</p>
                <p class="bio">{move || profile.with(|p| p.bio.clone())}</p>
                <div class="profile-actions">
                    <button id="copy-email" type="button" class="btn" data-email=copy_email on:click=on_copy>
                        {move || copy_label.with(|l| l.text().to_owned())}
                    </button>
                    <a
                        id="download-cv"
                        class="btn btn--ghost"
                        href=cv_href
                        download=""
                        on:click=move |_| flash_label(download_label, DOWNLOADING_LABEL, DOWNLOAD_LABEL_RESET_MS)
                    >
                        {move || download_label.with(|l| l.text().to_owned())}
                    </a>
                </div>
            </div>
        </div>
    }
}
