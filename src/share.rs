//! Share links for a finished game.
//!
//! Pure functions of the final score and the page URL. Query components are
//! percent-encoded.

use strum_macros::{AsRefStr, EnumIter};
use urlencoding::encode;

use crate::render::score_text;

/// Where a score can be shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    X,
    Bluesky,
    Email,
}

/// The message posted alongside the link.
pub fn share_text(score: u32) -> String {
    format!("Накрадох цели {} в ПРАС-МАН, преди народът да ме свали! Играй и ти тук:", score_text(score))
}

/// Builds the share link for one platform.
pub fn share_url(platform: SharePlatform, score: u32, url: &str) -> String {
    let text = share_text(score);
    match platform {
        SharePlatform::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
            encode(url),
            encode(&text)
        ),
        SharePlatform::X => format!("https://twitter.com/intent/tweet?text={}&url={}", encode(&text), encode(url)),
        SharePlatform::Bluesky => format!("https://bsky.app/intent/compose?text={}", encode(&format!("{text} {url}"))),
        SharePlatform::Email => format!(
            "mailto:?subject=ПРАС-МАН: Моят резултат&body={}",
            encode(&format!("{text}\nИграй тук: {url}"))
        ),
    }
}

/// The text copied to the clipboard by the copy-link button.
pub fn clipboard_text(score: u32, url: &str) -> String {
    format!("Накрадох {}. Играй и ти ПРАС-МАН тук: {url}", score_text(score))
}

/// Every share destination for a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub links: Vec<(SharePlatform, String)>,
    pub clipboard: String,
}

impl ShareLinks {
    pub fn new(score: u32, url: &str) -> Self {
        use strum::IntoEnumIterator;

        Self {
            links: SharePlatform::iter().map(|platform| (platform, share_url(platform, score, url))).collect(),
            clipboard: clipboard_text(score, url),
        }
    }

    pub fn get(&self, platform: SharePlatform) -> Option<&str> {
        self.links.iter().find(|(p, _)| *p == platform).map(|(_, link)| link.as_str())
    }
}
