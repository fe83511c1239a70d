use crate::utils::intent_uri;
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstagramMatch {
    Post { shortcode: String },
    Reel { shortcode: String },
    Profile { username: String },
}

static POST_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"instagram\.com/p/([A-Za-z0-9_-]+)").unwrap());
static REEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"instagram\.com/(?:reel|reels|tv)/([A-Za-z0-9_-]+)").unwrap());
static PROFILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?instagram\.com/([A-Za-z0-9._]+)/?(?:[?#]|$)").unwrap()
});

/// First path segments that are app sections, not usernames.
const RESERVED_PATHS: &[&str] = &[
    "p", "reel", "reels", "tv", "explore", "stories", "accounts", "direct",
];

pub fn recognize(url: &str) -> Option<InstagramMatch> {
    if let Some(caps) = POST_REGEX.captures(url) {
        return Some(InstagramMatch::Post {
            shortcode: caps[1].to_string(),
        });
    }

    if let Some(caps) = REEL_REGEX.captures(url) {
        return Some(InstagramMatch::Reel {
            shortcode: caps[1].to_string(),
        });
    }

    let caps = PROFILE_REGEX.captures(url)?;
    let username = caps.get(1)?.as_str();
    if RESERVED_PATHS.contains(&username.to_ascii_lowercase().as_str()) {
        return None;
    }

    Some(InstagramMatch::Profile {
        username: username.to_string(),
    })
}

/// Instagram only exposes numeric media IDs to `instagram://media`, so a
/// shortcode link opens the app but may not land on the post itself.
pub fn build(web_url: &str, m: &InstagramMatch) -> DeepLinkResult {
    let (ios, path) = match m {
        InstagramMatch::Post { shortcode } => (
            format!("instagram://media?id={shortcode}"),
            format!("p/{shortcode}"),
        ),
        InstagramMatch::Reel { shortcode } => (
            format!("instagram://media?id={shortcode}"),
            format!("reel/{shortcode}"),
        ),
        InstagramMatch::Profile { username } => (
            format!("instagram://user?username={username}"),
            username.clone(),
        ),
    };

    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(ios),
        android: Some(intent_uri(
            &format!("instagram.com/{path}"),
            &[("scheme", "https"), ("package", "com.instagram.android")],
        )),
        platform: Platform::Instagram,
    }
}
