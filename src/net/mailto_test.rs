use super::*;

#[test]
fn encode_component_matches_encode_uri_component() {
    assert_eq!(encode_component("a b"), "a%20b");
    assert_eq!(encode_component("me@example.com"), "me%40example.com");
    assert_eq!(encode_component("line\nbreak"), "line%0Abreak");
    assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
    assert_eq!(encode_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
    assert_eq!(encode_component("café"), "caf%C3%A9");
}

#[test]
fn contact_link_formats_body() {
    let link = MailtoLink::for_contact(" me@site.dev ", "Hi", "Sam", "sam@x.io", "Hello there");
    assert_eq!(link.recipient, "me@site.dev");
    assert_eq!(link.body, "Name: Sam\nEmail: sam@x.io\n\nHello there");
}

#[test]
fn uri_encodes_every_component() {
    let link = MailtoLink::for_contact("me@site.dev", "Job offer", "Sam", "sam@x.io", "Hi!");
    assert_eq!(
        link.to_uri(),
        "mailto:me%40site.dev?subject=Job%20offer&body=Name%3A%20Sam%0AEmail%3A%20sam%40x.io%0A%0AHi!"
    );
}
