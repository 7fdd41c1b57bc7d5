//! Small document/window helpers used by more than one component.
//!
//! Outside the browser these are no-ops so components stay callable from
//! native code paths.

use crate::state::ui::TransientLabel;

/// Suspend or restore page scrolling while a modal is visible.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_previous| ())
        };
        if let Err(e) = result {
            leptos::logging::warn!("failed to toggle page scroll: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _locked = locked;
    }
}

/// Navigate the current window, e.g. to a `mailto:` link.
pub fn navigate(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                leptos::logging::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _href = href;
    }
}

/// Current time as an ISO-8601 string.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Show `text` on a button for `duration_ms`, then settle back to its
/// resting label.
pub fn flash_label(label: leptos::prelude::RwSignal<TransientLabel>, text: &str, duration_ms: u64) {
    use leptos::prelude::Update;

    label.update(|l| l.flash(text));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(duration_ms)).await;
        label.update(TransientLabel::settle);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _duration_ms = duration_ms;
    }
}

/// Move keyboard focus to the element with `id`, if present.
pub fn focus_element(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(element) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            return;
        };
        if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
            if let Err(e) = html.focus() {
                leptos::logging::warn!("could not focus #{id}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _id = id;
    }
}
