use super::*;

#[test]
fn bare_avatar_filename_is_joined_onto_base() {
    let config = SiteConfig::default();
    assert_eq!(config.resolve_avatar("me.jpg"), "assets/me.jpg");
}

#[test]
fn avatar_base_trailing_slashes_are_collapsed() {
    let config = SiteConfig { avatar_base: Some("img///".to_owned()), ..SiteConfig::default() };
    assert_eq!(config.resolve_avatar("me.png"), "img/me.png");
}

#[test]
fn avatar_paths_and_urls_pass_through() {
    let config = SiteConfig::default();
    assert_eq!(config.resolve_avatar("photos/me.jpg"), "photos/me.jpg");
    assert_eq!(config.resolve_avatar("https://cdn.example.com/me.jpg"), "https://cdn.example.com/me.jpg");
    assert_eq!(config.resolve_avatar("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
}

#[test]
fn avatar_without_base_is_used_verbatim() {
    let config = SiteConfig { avatar_base: None, ..SiteConfig::default() };
    assert_eq!(config.resolve_avatar(" me.jpg "), "me.jpg");
}

#[test]
fn empty_avatar_stays_empty() {
    assert_eq!(SiteConfig::default().resolve_avatar("  "), "");
}

#[test]
fn mail_subject_falls_back_when_blank() {
    let config = SiteConfig::default();
    assert_eq!(config.mail_subject("   "), DEFAULT_MAIL_SUBJECT);
    assert_eq!(config.mail_subject("Hello"), "Hello");
}
