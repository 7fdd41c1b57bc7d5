//! Hero line that cycles through the owner's roles.
//!
//! Every [`ROLE_ROTATE_INTERVAL_MS`](crate::config::ROLE_ROTATE_INTERVAL_MS)
//! the text fades out and shifts up, then after
//! [`ROLE_FADE_MS`](crate::config::ROLE_FADE_MS) the next role is swapped in
//! and faded back. The loop runs for the life of the page; an empty role list
//! never starts it.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::config::{ROLE_FADE_MS, ROLE_ROTATE_INTERVAL_MS};
use crate::state::rotator::parse_roles;
#[cfg(feature = "csr")]
use crate::state::rotator::RoleRotator;

const VISIBLE_STYLE: &str = "opacity:1;transform:translateY(0)";
const FADED_STYLE: &str = "opacity:0;transform:translateY(-6px)";

#[component]
pub fn RotatingRole(#[prop(into)] roles: String) -> impl IntoView {
    let parsed = parse_roles(&roles);
    let text = RwSignal::new(parsed.first().cloned().unwrap_or_default());
    let faded = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        let mut rotator = RoleRotator::new(parsed);
        if !rotator.is_empty() {
            let alive = Arc::new(AtomicBool::new(true));
            let alive_task = alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(Duration::from_millis(ROLE_ROTATE_INTERVAL_MS)).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        break;
                    }
                    faded.set(true);
                    gloo_timers::future::sleep(Duration::from_millis(ROLE_FADE_MS)).await;
                    if let Some(role) = rotator.advance() {
                        text.set(role.to_owned());
                    }
                    faded.set(false);
                }
            });
            on_cleanup(move || alive.store(false, Ordering::Relaxed));
        }
    }

    view! {
        <span
            id="role"
            class="role"
            data-roles=roles
            style=move || if faded.get() { FADED_STYLE } else { VISIBLE_STYLE }
        >
            {move || text.get()}
        </span>
    }
}
