use super::*;
use crate::state::projects::{ProjectFilter, parse_tags};

#[test]
fn default_profile_fills_every_skill_category() {
    let profile = default_profile();
    for group in profile.ordered_skills() {
        assert!(!group.items.is_empty(), "{:?} has no items", group.category);
    }
    assert!(profile.endpoint().is_none());
}

#[test]
fn all_filter_comes_first() {
    assert_eq!(PROJECT_FILTERS.first().map(|(key, _)| *key), Some("all"));
}

#[test]
fn every_project_is_reachable_from_some_tag_filter() {
    for project in projects() {
        let reachable = PROJECT_FILTERS
            .iter()
            .filter(|(key, _)| *key != "all")
            .any(|(key, _)| ProjectFilter::parse(key).matches(&parse_tags(&project.tags)));
        assert!(reachable, "{} matches no filter button", project.title);
    }
}

#[test]
fn hero_roles_parse_to_several_entries() {
    assert!(crate::state::rotator::parse_roles(HERO_ROLES).len() > 1);
}
