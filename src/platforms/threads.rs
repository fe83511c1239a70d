use crate::utils::{intent_uri, strip_protocol};
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

static THREADS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(?:www\.)?threads\.(?:net|com)/@([^/?]+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadsMatch {
    pub username: String,
}

pub fn recognize(url: &str) -> Option<ThreadsMatch> {
    THREADS_REGEX.captures(url).map(|caps| ThreadsMatch {
        username: caps[1].to_string(),
    })
}

pub fn build(web_url: &str, m: &ThreadsMatch) -> DeepLinkResult {
    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("barcelona://user?username={}", m.username)),
        android: Some(intent_uri(
            strip_protocol(web_url),
            &[("scheme", "https"), ("package", "com.instagram.barcelona")],
        )),
        platform: Platform::Threads,
    }
}
