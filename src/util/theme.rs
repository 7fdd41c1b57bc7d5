//! Theme initialization and toggle.
//!
//! Reads the visitor's preference from storage and reflects it as a
//! `data-theme` attribute on `<body>`: present with `"light"` for the light
//! theme, absent for dark. Toggling writes the new value back under
//! [`THEME_KEY`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write leaves the page themed
//! correctly for this visit and is only logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_KEY;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only `"light"` selects the light theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

/// Read the persisted theme, defaulting to dark.
pub fn read_preference(store: &impl KeyValueStore) -> Theme {
    match store.get_item(THEME_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            leptos::logging::warn!("theme preference unreadable: {e}");
            Theme::Dark
        }
    }
}

/// Apply the `data-theme` attribute on `<body>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let result = match theme {
            Theme::Light => body.set_attribute("data-theme", "light"),
            Theme::Dark => body.remove_attribute("data-theme"),
        };
        if let Err(e) = result {
            leptos::logging::warn!("failed to apply theme: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _theme = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(store: &impl KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = store.set_item(THEME_KEY, next.as_str()) {
        leptos::logging::warn!("theme not persisted: {e}");
    }
    next
}
