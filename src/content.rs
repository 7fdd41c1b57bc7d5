//! Static page content shipped with the site.
//!
//! The profile here is only the first-visit default; once the owner saves
//! from the settings panel, the persisted record replaces it on every load.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::profile::{ProfileRecord, SkillCategory};
use crate::state::projects::Project;

/// Comma-separated roles for the hero line, as in the `data-roles` attribute.
pub const HERO_ROLES: &str = "Software Developer, Web Developer, Mobile Developer, Problem Solver";

/// Filter buttons above the project grid, `all` first.
pub const PROJECT_FILTERS: &[(&str, &str)] =
    &[("all", "All"), ("web", "Web"), ("mobile", "Mobile"), ("data", "Data"), ("tools", "Tools")];

pub const HERO_VIDEO_SRC: &str = "assets/hero.mp4";
pub const CV_HREF: &str = "assets/cv.pdf";

#[must_use]
pub fn default_profile() -> ProfileRecord {
    let mut record = ProfileRecord {
        name: "Your Name".to_owned(),
        role: "Software Developer".to_owned(),
        email: "your-email@example.com".to_owned(),
        bio: "I build fast, accessible web and mobile applications and enjoy turning rough ideas into polished products."
            .to_owned(),
        avatar: "avatar.jpg".to_owned(),
        endpoint: None,
        skills: Vec::new(),
    };
    let skills: [(SkillCategory, &[&str]); 6] = [
        (SkillCategory::Programming, &["Rust", "TypeScript", "Python", "Java"]),
        (SkillCategory::Web, &["HTML & CSS", "React", "Leptos", "REST APIs"]),
        (SkillCategory::Database, &["PostgreSQL", "SQLite", "MongoDB"]),
        (SkillCategory::Mobile, &["Flutter", "Kotlin"]),
        (SkillCategory::Concepts, &["Data Structures", "Concurrency", "Testing"]),
        (SkillCategory::Soft, &["Communication", "Teamwork", "Mentoring"]),
    ];
    for (category, items) in skills {
        record.set_skills(category, items.iter().map(|item| (*item).to_owned()).collect());
    }
    record
}

#[must_use]
pub fn projects() -> Vec<Project> {
    let rows: [(&str, &str, &str, &str); 5] = [
        (
            "Storefront",
            "Headless e-commerce front end.",
            "A server-rendered storefront with cart, checkout and an admin dashboard backed by a REST API.",
            "web",
        ),
        (
            "Habit Tracker",
            "Offline-first habit tracking app.",
            "A cross-platform mobile app that syncs streaks when a connection is available and works fully offline.",
            "mobile",
        ),
        (
            "Metrics Pipeline",
            "Event ingestion and dashboards.",
            "Streams application events into a columnar store and renders live dashboards over them.",
            "data, web",
        ),
        (
            "Release CLI",
            "Changelog and version bump tool.",
            "A command-line tool that reads commit history, proposes the next version and writes the changelog.",
            "tools",
        ),
        (
            "Study Buddy",
            "Flashcards with spaced repetition.",
            "A web and mobile flashcard app that schedules reviews with a spaced-repetition algorithm.",
            "web, mobile",
        ),
    ];
    rows.into_iter()
        .map(|(title, summary, description, tags)| Project {
            title: title.to_owned(),
            summary: summary.to_owned(),
            description: description.to_owned(),
            tags: tags.to_owned(),
        })
        .collect()
}
