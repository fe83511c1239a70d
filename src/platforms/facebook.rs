use crate::utils::intent_uri;
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

static FACEBOOK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(?:www\.|m\.)?facebook\.com/(.*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacebookMatch {
    /// Everything after `facebook.com/`, query included. May be empty.
    pub path: String,
}

pub fn recognize(url: &str) -> Option<FacebookMatch> {
    FACEBOOK_REGEX.captures(url).map(|caps| FacebookMatch {
        path: caps[1].to_string(),
    })
}

pub fn build(web_url: &str, m: &FacebookMatch) -> DeepLinkResult {
    let page = format!("facebook.com/{}", m.path);

    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("fb://facewebmodal/f?href={page}")),
        android: Some(intent_uri(
            &page,
            &[("scheme", "https"), ("package", "com.facebook.katana")],
        )),
        platform: Platform::Facebook,
    }
}
