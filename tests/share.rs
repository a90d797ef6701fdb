use pretty_assertions::assert_eq;
use prasman::share::{clipboard_text, share_text, share_url, ShareLinks, SharePlatform};
use speculoos::prelude::*;
use strum::IntoEnumIterator;

const URL: &str = "https://example.com/game?x=1";

#[test]
fn test_share_text() {
    assert_eq!(
        share_text(1200),
        "Накрадох цели 1200 € в ПРАС-МАН, преди народът да ме свали! Играй и ти тук:"
    );
}

#[test]
fn test_clipboard_text() {
    assert_eq!(
        clipboard_text(500, URL),
        "Накрадох 500 €. Играй и ти ПРАС-МАН тук: https://example.com/game?x=1"
    );
}

#[test]
fn test_facebook_link() {
    let link = share_url(SharePlatform::Facebook, 300, URL);

    assert_that(&link.as_str()).starts_with("https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fgame%3Fx%3D1&quote=");
    assert_that(&link.as_str()).contains("300%20%E2%82%AC");
}

#[test]
fn test_x_link_puts_text_first() {
    let link = share_url(SharePlatform::X, 300, URL);

    assert_that(&link.as_str()).starts_with("https://twitter.com/intent/tweet?text=");
    assert_that(&link.as_str()).ends_with("&url=https%3A%2F%2Fexample.com%2Fgame%3Fx%3D1");
}

#[test]
fn test_bluesky_link_joins_text_and_url() {
    let link = share_url(SharePlatform::Bluesky, 300, URL);
    let expected = format!(
        "https://bsky.app/intent/compose?text={}",
        urlencoding::encode(&format!("{} {}", share_text(300), URL))
    );

    assert_eq!(link, expected);
}

#[test]
fn test_email_link() {
    let link = share_url(SharePlatform::Email, 300, URL);

    assert_that(&link.as_str()).starts_with("mailto:?subject=ПРАС-МАН: Моят резултат&body=");
    // The body's newline is encoded
    assert_that(&link.as_str()).contains("%0A");
}

#[test]
fn test_share_links_cover_every_platform() {
    let links = ShareLinks::new(900, URL);

    assert_eq!(links.links.len(), SharePlatform::iter().count());
    for platform in SharePlatform::iter() {
        assert_eq!(links.get(platform), Some(share_url(platform, 900, URL).as_str()));
    }
    assert_eq!(links.clipboard, clipboard_text(900, URL));
}
