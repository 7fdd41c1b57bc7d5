//! Skills grid, one group per category in a fixed order.

use leptos::prelude::*;

use crate::state::profile::ProfileRecord;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileRecord>>();

    let groups = move || {
        profile.with(|p| {
            p.ordered_skills()
                .into_iter()
                .map(|group| {
                    let items = group.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view();
                    view! {
                        <div class="skill-group" data-category=group.category.key()>
                            <h3>{group.category.heading()}</h3>
                            <ul>{items}</ul>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="skills" class="section">
            <h2>"Skills"</h2>
            <div class="skills-grid">{groups}</div>
        </section>
    }
}
