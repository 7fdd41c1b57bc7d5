//! Project grid with tag filter buttons.
//!
//! Exactly one filter button is active at a time. Cards render in content
//! order; those not matching the active tag are left out.

use leptos::prelude::*;

use crate::state::projects::{Project, ProjectFilter, visible_projects};
use crate::state::ui::ModalState;
use crate::util::dom::set_scroll_locked;

#[component]
pub fn ProjectGallery(
    projects: Vec<Project>,
    filters: &'static [(&'static str, &'static str)],
    modal: RwSignal<ModalState>,
) -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::All);
    let projects = StoredValue::new(projects);

    let filter_buttons = filters
        .iter()
        .map(|&(key, label)| {
            view! {
                <button
                    type="button"
                    class="filter-btn"
                    class:active=move || filter.with(|f| f.as_str() == key)
                    data-filter=key
                    on:click=move |_| filter.set(ProjectFilter::parse(key))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let cards = move || {
        let active = filter.get();
        projects.with_value(|all| {
            visible_projects(all, &active)
                .into_iter()
                .map(|project| project_card(project, modal))
                .collect_view()
        })
    };

    view! {
        <div class="filters" role="toolbar" aria-label="Filter projects">{filter_buttons}</div>
        <div class="project-grid">{cards}</div>
    }
}

fn project_card(project: &Project, modal: RwSignal<ModalState>) -> impl IntoView + use<> {
    let title = project.title.clone();
    let description = project.description.clone();
    let on_view = {
        let title = title.clone();
        let description = description.clone();
        move |_| {
            modal.update(|m| m.show(&title, &description));
            set_scroll_locked(true);
        }
    };

    view! {
        <article class="card" data-tags=project.tags.clone()>
            <h3>{project.title.clone()}</h3>
            <p class="card-summary">{project.summary.clone()}</p>
            <button type="button" class="view-btn" data-title=title data-desc=description on:click=on_view>
                "View details"
            </button>
        </article>
    }
}
