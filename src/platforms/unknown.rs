use crate::{DeepLinkResult, Platform};

/// Fallback for URLs no handler recognized: no deep links, the URL itself as
/// the web target.
pub fn build(web_url: &str) -> DeepLinkResult {
    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: None,
        android: None,
        platform: Platform::Unknown,
    }
}
