//! The one-page portfolio: hero, about, skills, projects, contact.

use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::hero_video::HeroVideo;
use crate::components::profile_card::ProfileCard;
use crate::components::project_gallery::ProjectGallery;
use crate::components::project_modal::ProjectModal;
use crate::components::rotating_role::RotatingRole;
use crate::components::settings_modal::SettingsModal;
use crate::components::site_header::SiteHeader;
use crate::components::skills_section::SkillsSection;
use crate::content::{CV_HREF, HERO_ROLES, HERO_VIDEO_SRC, PROJECT_FILTERS, projects};
use crate::state::profile::ProfileRecord;
use crate::state::settings::SettingsPanel;
use crate::state::ui::ModalState;
use crate::util::dom::set_scroll_locked;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileRecord>>();
    let project_modal = RwSignal::new(ModalState::default());
    let settings = RwSignal::new(SettingsPanel::default());
    let settings_open = RwSignal::new(false);

    let open_settings = Callback::new(move |()| {
        let record = profile.get_untracked();
        settings.update(|panel| panel.open(&record));
        settings_open.set(true);
        set_scroll_locked(true);
    });

    view! {
        <SiteHeader cv_href=CV_HREF on_settings=open_settings/>
        <main id="top">
            <section id="hero" class="hero">
                <div class="hero-text">
                    <h1>"Hi, I'm " {move || profile.with(|p| p.name.clone())}</h1>
                    <p class="hero-sub">"I work as a " <RotatingRole roles=HERO_ROLES/></p>
                </div>
                <HeroVideo src=HERO_VIDEO_SRC/>
            </section>
            <section id="about" class="section">
                <h2>"About"</h2>
                <ProfileCard cv_href=CV_HREF/>
            </section>
            <SkillsSection/>
            <section id="projects" class="section">
                <h2>"Projects"</h2>
                <ProjectGallery projects=projects() filters=PROJECT_FILTERS modal=project_modal/>
            </section>
            <ContactSection/>
        </main>
        <ProjectModal modal=project_modal/>
        <SettingsModal panel=settings open=settings_open/>
    }
}
