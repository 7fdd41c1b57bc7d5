//! Shared presentation state: feedback lines and modal visibility.
//!
//! DESIGN
//! ======
//! The contact form and the settings panel both report progress in a
//! `form-feedback` line; the project and settings dialogs share the same
//! open/closed shape. Keeping these here avoids two copies drifting apart.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual tone of a feedback line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedbackTone {
    #[default]
    Neutral,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: FeedbackTone,
}

impl Feedback {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: FeedbackTone::Neutral }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: FeedbackTone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: FeedbackTone::Error }
    }

    /// Class list for the feedback element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.tone {
            FeedbackTone::Neutral => "form-feedback",
            FeedbackTone::Success => "form-feedback success",
            FeedbackTone::Error => "form-feedback error",
        }
    }
}

/// Open/closed state of a dialog plus the text it shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub title: String,
    pub description: String,
}

impl ModalState {
    pub fn show(&mut self, title: &str, description: &str) {
        self.title = title.to_owned();
        self.description = description.to_owned();
        self.open = true;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    /// Value for the dialog's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }
}

/// Button text that briefly shows a status, then returns to a fixed label.
///
/// Settling always goes back to the resting text, so overlapping flashes
/// cannot leave a status stuck on the button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransientLabel {
    resting: &'static str,
    shown: Option<String>,
}

impl TransientLabel {
    #[must_use]
    pub fn new(resting: &'static str) -> Self {
        Self { resting, shown: None }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.shown.as_deref().unwrap_or(self.resting)
    }

    pub fn flash(&mut self, text: &str) {
        self.shown = Some(text.to_owned());
    }

    pub fn settle(&mut self) {
        self.shown = None;
    }
}
