use crate::utils::intent_uri;
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

static REDDIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:[A-Za-z0-9_-]+\.)?reddit\.com/(u|user|r)/([^/?#]+)")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedditMatch {
    User { name: String },
    Subreddit { name: String },
}

pub fn recognize(url: &str) -> Option<RedditMatch> {
    let caps = REDDIT_REGEX.captures(url)?;
    let name = caps[2].to_string();

    if caps[1].eq_ignore_ascii_case("r") {
        Some(RedditMatch::Subreddit { name })
    } else {
        Some(RedditMatch::User { name })
    }
}

pub fn build(web_url: &str, m: &RedditMatch) -> DeepLinkResult {
    let path = match m {
        RedditMatch::User { name } => format!("user/{name}"),
        RedditMatch::Subreddit { name } => format!("r/{name}"),
    };

    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("reddit://{path}")),
        android: Some(intent_uri(
            &path,
            &[("scheme", "reddit"), ("package", "com.reddit.android")],
        )),
        platform: Platform::Reddit,
    }
}
