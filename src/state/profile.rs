//! Profile record: the single source of truth for the owner's details.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell owns one [`ProfileRecord`] in a signal. The profile card,
//! skills section and contact section render from it; the settings panel
//! edits a draft of it and writes the result back. Persistence goes through
//! [`ProfileStore`] so it can be swapped for an in-memory store in tests.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::config::PROFILE_KEY;
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};

/// Skill categories shown on the page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "prog")]
    Programming,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "db")]
    Database,
    #[serde(rename = "mobile")]
    Mobile,
    #[serde(rename = "concepts")]
    Concepts,
    #[serde(rename = "soft")]
    Soft,
}

impl SkillCategory {
    pub const ALL: [Self; 6] = [Self::Programming, Self::Web, Self::Database, Self::Mobile, Self::Concepts, Self::Soft];

    /// Short key used in element ids and the persisted record.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Programming => "prog",
            Self::Web => "web",
            Self::Database => "db",
            Self::Mobile => "mobile",
            Self::Concepts => "concepts",
            Self::Soft => "soft",
        }
    }

    /// Index in [`Self::ALL`].
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::Programming => 0,
            Self::Web => 1,
            Self::Database => 2,
            Self::Mobile => 3,
            Self::Concepts => 4,
            Self::Soft => 5,
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Programming => "Programming Languages",
            Self::Web => "Web Development",
            Self::Database => "Databases",
            Self::Mobile => "Mobile Development",
            Self::Concepts => "Core Concepts",
            Self::Soft => "Soft Skills",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    #[serde(default)]
    pub items: Vec<String>,
}

/// In memory the skills are an ordered list of non-empty groups. On the wire
/// (storage and uploads) the record is flat: one string array per category
/// key next to the scalar fields, and `endpoint` is always a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileWire", into = "ProfileWire")]
pub struct ProfileRecord {
    pub name: String,
    pub role: String,
    pub email: String,
    pub bio: String,
    /// Avatar filename, path or URL as the owner typed it.
    pub avatar: String,
    /// Remote sink for contact messages and profile uploads.
    pub endpoint: Option<String>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct ProfileWire {
    name: String,
    role: String,
    email: String,
    bio: String,
    avatar: String,
    endpoint: String,
    prog: Vec<String>,
    web: Vec<String>,
    db: Vec<String>,
    mobile: Vec<String>,
    concepts: Vec<String>,
    soft: Vec<String>,
}

impl From<ProfileWire> for ProfileRecord {
    fn from(wire: ProfileWire) -> Self {
        let has_endpoint = !wire.endpoint.trim().is_empty();
        let mut record = Self {
            endpoint: has_endpoint.then_some(wire.endpoint),
            name: wire.name,
            role: wire.role,
            email: wire.email,
            bio: wire.bio,
            avatar: wire.avatar,
            skills: Vec::new(),
        };
        let lists = [wire.prog, wire.web, wire.db, wire.mobile, wire.concepts, wire.soft];
        for (category, items) in SkillCategory::ALL.into_iter().zip(lists) {
            record.set_skills(category, items);
        }
        record
    }
}

impl From<ProfileRecord> for ProfileWire {
    fn from(record: ProfileRecord) -> Self {
        let [prog, web, db, mobile, concepts, soft] =
            SkillCategory::ALL.map(|category| record.skills_for(category).to_vec());
        Self {
            name: record.name,
            role: record.role,
            email: record.email,
            bio: record.bio,
            avatar: record.avatar,
            endpoint: record.endpoint.unwrap_or_default(),
            prog,
            web,
            db,
            mobile,
            concepts,
            soft,
        }
    }
}

impl ProfileRecord {
    /// Configured endpoint, ignoring blank values.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// Items for `category`; empty when the record has no such group.
    #[must_use]
    pub fn skills_for(&self, category: SkillCategory) -> &[String] {
        self.skills
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.items.as_slice())
            .unwrap_or_default()
    }

    /// Replace the items for `category`. Groups stay in category order and
    /// an empty list removes the group.
    pub fn set_skills(&mut self, category: SkillCategory, items: Vec<String>) {
        self.skills.retain(|group| group.category != category);
        if items.is_empty() {
            return;
        }
        let slot = self.skills.iter().take_while(|group| group.category.position() < category.position()).count();
        self.skills.insert(slot, SkillGroup { category, items });
    }

    /// Groups in display order, one per category, missing ones empty.
    #[must_use]
    pub fn ordered_skills(&self) -> Vec<SkillGroup> {
        SkillCategory::ALL
            .iter()
            .map(|&category| SkillGroup { category, items: self.skills_for(category).to_vec() })
            .collect()
    }
}

/// Persistence seam for the profile record.
pub trait ProfileStore {
    /// The last saved record, if any.
    fn load_profile(&self) -> Option<ProfileRecord>;

    /// Overwrite the saved record.
    ///
    /// # Errors
    ///
    /// Returns an error when the record cannot be encoded or written.
    fn save_profile(&self, record: &ProfileRecord) -> Result<(), StorageError>;
}

impl<S: KeyValueStore> ProfileStore for S {
    fn load_profile(&self) -> Option<ProfileRecord> {
        load_json(self, PROFILE_KEY)
    }

    fn save_profile(&self, record: &ProfileRecord) -> Result<(), StorageError> {
        save_json(self, PROFILE_KEY, record)
    }
}
