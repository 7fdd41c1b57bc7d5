//! Header button switching between the light and dark theme.

use leptos::prelude::*;

use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = RwSignal::new(theme::read_preference(&BrowserStorage));
    theme::apply(current.get_untracked());

    let on_click = move |_| {
        current.update(|t: &mut Theme| *t = theme::toggle(&BrowserStorage, *t));
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" type="button" aria-label="Toggle theme" on:click=on_click>
            {move || current.get().icon()}
        </button>
    }
}
