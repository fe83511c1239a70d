use crate::utils::{intent_uri, strip_protocol};
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedinKind {
    Profile,
    Post,
    Company,
    Job,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedinMatch {
    pub kind: LinkedinKind,
    pub id: String,
}

/// Tried in declaration order; the first hit wins even when a later
/// pattern would also match.
static PATTERNS: Lazy<[(LinkedinKind, Regex); 5]> = Lazy::new(|| {
    [
        (
            LinkedinKind::Profile,
            Regex::new(r"linkedin\.com/in/([^/?#]+)").unwrap(),
        ),
        (
            LinkedinKind::Post,
            Regex::new(r"linkedin\.com/posts/([^/?#]+)").unwrap(),
        ),
        (
            LinkedinKind::Post,
            Regex::new(r"linkedin\.com/feed/update/(?:urn:li:activity:)?([^/?#]+)").unwrap(),
        ),
        (
            LinkedinKind::Company,
            Regex::new(r"linkedin\.com/company/([^/?#]+)").unwrap(),
        ),
        (
            LinkedinKind::Job,
            Regex::new(r"linkedin\.com/jobs/view/([^/?#]+)").unwrap(),
        ),
    ]
});

pub fn recognize(url: &str) -> Option<LinkedinMatch> {
    PATTERNS.iter().find_map(|(kind, regex)| {
        regex.captures(url).map(|caps| LinkedinMatch {
            kind: *kind,
            id: caps[1].to_string(),
        })
    })
}

fn ios_link(m: &LinkedinMatch) -> Option<String> {
    if m.id.is_empty() {
        return None;
    }

    let link = match m.kind {
        LinkedinKind::Profile => format!("linkedin://in/{}", m.id),
        LinkedinKind::Post => format!("linkedin://urn:li:activity:{}", m.id),
        LinkedinKind::Company => format!("linkedin://company/{}", m.id),
        LinkedinKind::Job => format!("linkedin://job/{}", m.id),
    };
    Some(link)
}

/// The Android intent is the same for every kind: it reopens the web URL in
/// the app and carries the web URL as the browser fallback.
pub fn build(web_url: &str, m: &LinkedinMatch) -> DeepLinkResult {
    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: ios_link(m),
        android: Some(intent_uri(
            strip_protocol(web_url),
            &[
                ("scheme", "https"),
                ("package", "com.linkedin.android"),
                ("S.browser_fallback_url", web_url),
            ],
        )),
        platform: Platform::Linkedin,
    }
}
