//! Top navigation: section links, resume link, theme and settings buttons.

use leptos::prelude::*;

use crate::components::profile_card::DOWNLOADING_LABEL;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::RESUME_LABEL_RESET_MS;
use crate::state::profile::ProfileRecord;
use crate::state::ui::TransientLabel;
use crate::util::dom::flash_label;

#[component]
pub fn SiteHeader(#[prop(into)] cv_href: String, on_settings: Callback<()>) -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileRecord>>();
    let resume_label = RwSignal::new(TransientLabel::new("Resume"));

    view! {
        <header class="site-header">
            <a class="brand" href="#top">{move || profile.with(|p| p.name.clone())}</a>
            <nav class="site-nav" aria-label="Main">
                <a href="#about">"About"</a>
                <a href="#skills">"Skills"</a>
                <a href="#projects">"Projects"</a>
                <a href="#contact">"Contact"</a>
                <a
                    id="resume-nav"
                    href=cv_href
                    target="_blank"
                    rel="noopener"
                    on:click=move |_| flash_label(resume_label, DOWNLOADING_LABEL, RESUME_LABEL_RESET_MS)
                >
                    {move || resume_label.with(|l| l.text().to_owned())}
                </a>
            </nav>
            <div class="header-actions">
                <ThemeToggle/>
                <button
                    id="settings-btn"
                    type="button"
                    class="icon-btn"
                    aria-label="Open settings"
                    on:click=move |_| on_settings.run(())
                >
                    "⚙"
                </button>
            </div>
        </header>
    }
}
