use crate::utils::intent_uri;
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

/// Which YouTube URL form carried the video ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoShape {
    /// `youtube.com/watch?v=ID`, including `m.youtube.com`
    Watch,
    /// `youtu.be/ID`
    Short,
    /// `youtube.com/shorts/ID`
    Shorts,
    /// `youtube.com/embed/ID`
    Embed,
    /// `youtube.com/live/ID`
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeMatch {
    pub shape: VideoShape,
    pub video_id: String,
}

// Video IDs are exactly 11 URL-safe characters. Trial order matters.
static VIDEO_PATTERNS: Lazy<[(VideoShape, Regex); 5]> = Lazy::new(|| {
    [
        (
            VideoShape::Watch,
            Regex::new(r"(?:youtube\.com|m\.youtube\.com)/watch\?(?:.*&)?v=([a-zA-Z0-9_-]{11})(?:&|$)")
                .unwrap(),
        ),
        (
            VideoShape::Short,
            Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})(?:[?&#]|$)").unwrap(),
        ),
        (
            VideoShape::Shorts,
            Regex::new(r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})(?:[?&#]|$)").unwrap(),
        ),
        (
            VideoShape::Embed,
            Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})(?:[?&#]|$)").unwrap(),
        ),
        (
            VideoShape::Live,
            Regex::new(r"youtube\.com/live/([a-zA-Z0-9_-]{11})(?:[?&#]|$)").unwrap(),
        ),
    ]
});

static T_PARAM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]t=([0-9hms]+)").unwrap());
static START_PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]start=([0-9]+)").unwrap());

pub fn recognize(url: &str) -> Option<YoutubeMatch> {
    VIDEO_PATTERNS.iter().find_map(|(shape, regex)| {
        regex.captures(url).map(|caps| YoutubeMatch {
            shape: *shape,
            video_id: caps[1].to_string(),
        })
    })
}

/// Timestamp from `t=` (`123`, `43s`, `1m23s`) or, failing that, `start=`.
pub fn extract_timestamp(url: &str) -> Option<&str> {
    T_PARAM_REGEX
        .captures(url)
        .or_else(|| START_PARAM_REGEX.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Bare seconds get an `s` unit; formatted values such as `1m23s` pass
/// through as-is, they are not converted to seconds.
fn timestamp_param(timestamp: &str) -> String {
    if timestamp.bytes().all(|b| b.is_ascii_digit()) {
        format!("&t={timestamp}s")
    } else {
        format!("&t={timestamp}")
    }
}

pub fn build(web_url: &str, m: &YoutubeMatch) -> DeepLinkResult {
    let mut watch_path = format!("watch?v={}", m.video_id);
    if let Some(timestamp) = extract_timestamp(web_url) {
        watch_path.push_str(&timestamp_param(timestamp));
    }

    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("vnd.youtube://{watch_path}")),
        android: Some(intent_uri(
            &watch_path,
            &[
                ("scheme", "vnd.youtube"),
                ("package", "com.google.android.youtube"),
            ],
        )),
        platform: Platform::Youtube,
    }
}
