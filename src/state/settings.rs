//! Settings panel: lock gate, draft editing, save and optional upload.
//!
//! DESIGN
//! ======
//! The panel edits a [`SettingsDraft`], a text-field mirror of the shell's
//! [`ProfileRecord`]. Opening always repopulates the draft from the record
//! and locks it. Only an explicit edit unlocks the fields, and only an
//! unlocked panel can save. A save produces a new record; the component then
//! renders it, persists it, and (when an endpoint is set) uploads it.
//!
//! The local save is complete before any upload starts. Upload results only
//! change the status line.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::http::{JsonTransport, status_ok};
use crate::state::profile::{ProfileRecord, ProfileStore, SkillCategory};
use crate::state::ui::Feedback;

pub const EDIT_LABEL: &str = "Edit";
pub const EDITING_LABEL: &str = "Editing...";
pub const SAVE_LABEL: &str = "Save details";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsMode {
    #[default]
    Locked,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("settings are locked; choose Edit first")]
    Locked,
}

/// One editable input in the settings form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    Name,
    Role,
    Email,
    Bio,
    Avatar,
    Endpoint,
    Skills(SkillCategory),
}

impl SettingsField {
    pub const SCALARS: [Self; 6] = [Self::Name, Self::Role, Self::Email, Self::Bio, Self::Avatar, Self::Endpoint];

    /// Element id of the input.
    #[must_use]
    pub fn id(self) -> String {
        let suffix = match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Email => "email",
            Self::Bio => "bio",
            Self::Avatar => "avatar",
            Self::Endpoint => "endpoint",
            Self::Skills(category) => category.key(),
        };
        format!("settings-{suffix}")
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Email => "Email",
            Self::Bio => "Bio",
            Self::Avatar => "Avatar file",
            Self::Endpoint => "Endpoint URL (optional)",
            Self::Skills(category) => category.heading(),
        }
    }

    /// Rendered as a textarea rather than a single-line input.
    #[must_use]
    pub fn multiline(self) -> bool {
        matches!(self, Self::Bio | Self::Skills(_))
    }
}

/// Split a textarea into trimmed, non-empty lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub bio: String,
    pub avatar: String,
    pub endpoint: String,
    /// Newline-joined items, indexed like [`SkillCategory::ALL`].
    pub skills: [String; 6],
}

impl SettingsDraft {
    #[must_use]
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            name: record.name.clone(),
            role: record.role.clone(),
            email: record.email.clone(),
            bio: record.bio.clone(),
            avatar: record.avatar.clone(),
            endpoint: record.endpoint.clone().unwrap_or_default(),
            skills: SkillCategory::ALL.map(|category| record.skills_for(category).join("\n")),
        }
    }

    #[must_use]
    pub fn field(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Name => &self.name,
            SettingsField::Role => &self.role,
            SettingsField::Email => &self.email,
            SettingsField::Bio => &self.bio,
            SettingsField::Avatar => &self.avatar,
            SettingsField::Endpoint => &self.endpoint,
            SettingsField::Skills(category) => &self.skills[category.position()],
        }
    }

    pub fn set_field(&mut self, field: SettingsField, value: String) {
        let slot = match field {
            SettingsField::Name => &mut self.name,
            SettingsField::Role => &mut self.role,
            SettingsField::Email => &mut self.email,
            SettingsField::Bio => &mut self.bio,
            SettingsField::Avatar => &mut self.avatar,
            SettingsField::Endpoint => &mut self.endpoint,
            SettingsField::Skills(category) => &mut self.skills[category.position()],
        };
        *slot = value;
    }

    /// Build a record: scalars trimmed, blank endpoint dropped, text areas
    /// split into non-empty trimmed lines with order kept.
    #[must_use]
    pub fn to_record(&self) -> ProfileRecord {
        let endpoint = self.endpoint.trim();
        let mut record = ProfileRecord {
            name: self.name.trim().to_owned(),
            role: self.role.trim().to_owned(),
            email: self.email.trim().to_owned(),
            bio: self.bio.trim().to_owned(),
            avatar: self.avatar.trim().to_owned(),
            endpoint: (!endpoint.is_empty()).then(|| endpoint.to_owned()),
            skills: Vec::new(),
        };
        for (category, text) in SkillCategory::ALL.iter().zip(&self.skills) {
            record.set_skills(*category, split_lines(text));
        }
        record
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    pub mode: SettingsMode,
    pub draft: SettingsDraft,
    pub feedback: Feedback,
}

impl SettingsPanel {
    /// Repopulate from `record` and lock. Called every time the panel opens.
    pub fn open(&mut self, record: &ProfileRecord) {
        self.draft = SettingsDraft::from_record(record);
        self.mode = SettingsMode::Locked;
    }

    pub fn begin_edit(&mut self) {
        self.mode = SettingsMode::Editing;
    }

    /// Drop unsaved edits: restore the draft from `record` and lock.
    pub fn cancel(&mut self, record: &ProfileRecord) {
        self.open(record);
    }

    #[must_use]
    pub fn fields_enabled(&self) -> bool {
        self.mode == SettingsMode::Editing
    }

    #[must_use]
    pub fn save_enabled(&self) -> bool {
        self.fields_enabled()
    }

    #[must_use]
    pub fn edit_label(&self) -> &'static str {
        match self.mode {
            SettingsMode::Locked => EDIT_LABEL,
            SettingsMode::Editing => EDITING_LABEL,
        }
    }

    /// Edit is offered only while locked.
    #[must_use]
    pub fn edit_enabled(&self) -> bool {
        self.mode == SettingsMode::Locked
    }

    /// Turn the draft into a record and lock the panel again.
    ///
    /// # Errors
    ///
    /// [`SettingsError::Locked`] when edit mode was never entered.
    pub fn save(&mut self) -> Result<ProfileRecord, SettingsError> {
        if self.mode != SettingsMode::Editing {
            return Err(SettingsError::Locked);
        }
        let record = self.draft.to_record();
        self.mode = SettingsMode::Locked;
        Ok(record)
    }
}

/// Progress of the optional profile upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    /// No endpoint configured; the save stayed local.
    LocalOnly,
    Uploading,
    Uploaded,
    ServerError(u16),
    NetworkError,
}

impl UploadStatus {
    /// Status to show right after the local save.
    #[must_use]
    pub fn initial(record: &ProfileRecord) -> Self {
        if record.endpoint().is_some() { Self::Uploading } else { Self::LocalOnly }
    }

    #[must_use]
    pub fn feedback(self) -> Feedback {
        match self {
            Self::LocalOnly => Feedback::success("Details saved locally."),
            Self::Uploading => Feedback::neutral("Uploading..."),
            Self::Uploaded => Feedback::success("Details saved locally and uploaded to endpoint."),
            Self::ServerError(_) => Feedback::error("Saved locally; upload returned an error."),
            Self::NetworkError => Feedback::error("Saved locally; upload failed."),
        }
    }
}

/// Persist `record` locally. A failed write is logged; the page already
/// shows the new values so nothing is rolled back.
pub fn persist_profile(store: &impl ProfileStore, record: &ProfileRecord) {
    if let Err(e) = store.save_profile(record) {
        leptos::logging::warn!("profile not persisted: {e}");
    }
}

/// POST the full record to its endpoint, if it has one.
pub async fn upload_profile<T: JsonTransport>(transport: &T, record: &ProfileRecord) -> UploadStatus {
    let Some(endpoint) = record.endpoint() else {
        return UploadStatus::LocalOnly;
    };
    match transport.post_json(endpoint, record).await {
        Ok(status) if status_ok(status) => UploadStatus::Uploaded,
        Ok(status) => UploadStatus::ServerError(status),
        Err(e) => {
            leptos::logging::warn!("Upload failed: {e}");
            UploadStatus::NetworkError
        }
    }
}
