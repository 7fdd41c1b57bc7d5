//! Project gallery data and tag filtering.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Filter value that shows every card.
pub const ALL_FILTER: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    /// One-line teaser shown on the card.
    pub summary: String,
    /// Longer text shown in the detail modal.
    pub description: String,
    /// Comma-separated tags, as carried in the card's `data-tags`.
    pub tags: String,
}

impl Project {
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        parse_tags(&self.tags)
    }
}

/// Split a `data-tags` value on commas and trim each entry.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Tag(String),
}

impl ProjectFilter {
    /// Interpret a filter button's `data-filter` value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_FILTER { Self::All } else { Self::Tag(raw.to_owned()) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Tag(tag) => tag,
        }
    }

    /// Exact, case-sensitive tag membership; `All` matches everything.
    #[must_use]
    pub fn matches(&self, tags: &[&str]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tags.contains(&tag.as_str()),
        }
    }
}

/// Projects visible under `filter`, in content order.
#[must_use]
pub fn visible_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|project| filter.matches(&project.tag_list())).collect()
}
