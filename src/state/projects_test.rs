use super::*;

fn project(title: &str, tags: &str) -> Project {
    Project {
        title: title.to_owned(),
        summary: String::new(),
        description: String::new(),
        tags: tags.to_owned(),
    }
}

fn gallery() -> Vec<Project> {
    vec![
        project("Shop", "web, backend"),
        project("Tracker", "mobile"),
        project("Blog", "web"),
        project("Untagged", ""),
    ]
}

fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn parse_tags_trims_entries() {
    assert_eq!(parse_tags(" web ,backend,  ml "), vec!["web", "backend", "ml"]);
}

#[test]
fn parse_tags_keeps_empty_entries() {
    assert_eq!(parse_tags(""), vec![""]);
    assert_eq!(parse_tags("a,,b"), vec!["a", "", "b"]);
}

#[test]
fn all_filter_parses_to_all() {
    assert_eq!(ProjectFilter::parse("all"), ProjectFilter::All);
    assert_eq!(ProjectFilter::parse("web"), ProjectFilter::Tag("web".to_owned()));
    assert_eq!(ProjectFilter::parse("All"), ProjectFilter::Tag("All".to_owned()));
}

#[test]
fn all_filter_shows_every_card() {
    let projects = gallery();
    assert_eq!(visible_projects(&projects, &ProjectFilter::All).len(), projects.len());
}

#[test]
fn tag_filter_shows_only_matching_cards_in_order() {
    let projects = gallery();
    let visible = visible_projects(&projects, &ProjectFilter::parse("web"));
    assert_eq!(titles(&visible), vec!["Shop", "Blog"]);
}

#[test]
fn tag_filter_is_case_sensitive() {
    let projects = gallery();
    assert!(visible_projects(&projects, &ProjectFilter::parse("Web")).is_empty());
}

#[test]
fn filter_matches_exactly_the_cards_carrying_the_tag() {
    let projects = gallery();
    for tag in ["web", "backend", "mobile", "missing"] {
        let filter = ProjectFilter::parse(tag);
        let visible = titles(&visible_projects(&projects, &filter));
        let expected = projects
            .iter()
            .filter(|p| p.tag_list().contains(&tag))
            .map(|p| p.title.clone())
            .collect::<Vec<_>>();
        assert_eq!(visible, expected, "filter {tag}");
    }
}

#[test]
fn filter_round_trips_through_as_str() {
    assert_eq!(ProjectFilter::All.as_str(), "all");
    assert_eq!(ProjectFilter::parse("mobile").as_str(), "mobile");
}
