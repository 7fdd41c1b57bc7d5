//! Clipboard copy with the legacy `execCommand` fallback.
//!
//! ERROR HANDLING
//! ==============
//! Two tiers: the async Clipboard API first, then a hidden textarea selected
//! and copied with `document.execCommand("copy")`. When both fail the caller
//! gets [`CopyOutcome::Failed`] and shows [`copy_failed_message`] in a
//! blocking alert.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written through `navigator.clipboard`.
    Native,
    /// Written through the textarea + `execCommand` fallback.
    Legacy,
    Failed,
}

impl CopyOutcome {
    #[must_use]
    pub fn copied(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

#[must_use]
pub fn copy_failed_message(text: &str) -> String {
    format!("Copy failed, email: {text}")
}

/// Copy `text`, trying the native clipboard before the legacy fallback.
pub async fn copy_text(text: &str) -> CopyOutcome {
    #[cfg(feature = "csr")]
    {
        if write_native(text).await {
            return CopyOutcome::Native;
        }
        if write_legacy(text) {
            return CopyOutcome::Legacy;
        }
        CopyOutcome::Failed
    }
    #[cfg(not(feature = "csr"))]
    {
        let _text = text;
        CopyOutcome::Failed
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _message = message;
    }
}

#[cfg(feature = "csr")]
async fn write_native(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
        Ok(_) => true,
        Err(e) => {
            leptos::logging::warn!("clipboard write rejected: {e:?}");
            false
        }
    }
}

#[cfg(feature = "csr")]
fn write_legacy(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(element) = document.create_element("textarea") else {
        return false;
    };
    let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return false;
    };
    textarea.set_value(text);
    if let Err(e) = textarea.set_attribute("style", "position:fixed;top:-1000px;opacity:0") {
        leptos::logging::warn!("could not hide copy buffer: {e:?}");
    }
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = match document.dyn_into::<web_sys::HtmlDocument>() {
        Ok(html) => matches!(html.exec_command("copy"), Ok(true)),
        Err(_) => false,
    };
    textarea.remove();
    copied
}
