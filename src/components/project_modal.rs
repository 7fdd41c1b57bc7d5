//! Detail dialog for a single project.
//!
//! Closes on the close button, on a click outside the dialog body, or on
//! Escape while it is the visible dialog.

use leptos::prelude::*;

use crate::state::ui::ModalState;
use crate::util::dom::set_scroll_locked;

#[component]
pub fn ProjectModal(modal: RwSignal<ModalState>) -> impl IntoView {
    let close = move || {
        modal.update(ModalState::hide);
        set_scroll_locked(false);
    };

    #[cfg(feature = "csr")]
    {
        let _listener = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && modal.with_untracked(|m| m.open) {
                close();
            }
        });
    }

    view! {
        <div
            id="project-modal"
            class="modal"
            aria-hidden=move || modal.with(ModalState::aria_hidden)
            on:click=move |_| close()
        >
            <div class="modal-content" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <button type="button" class="modal-close" aria-label="Close" on:click=move |_| close()>
                    "✕"
                </button>
                <h3 id="modal-title">{move || modal.with(|m| m.title.clone())}</h3>
                <p id="modal-desc">{move || modal.with(|m| m.description.clone())}</p>
            </div>
        </div>
    }
}
