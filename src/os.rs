use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IOS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)iphone|ipad|ipod").unwrap());
static ANDROID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)android").unwrap());

/// Coarse client OS classification used to pick a deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Ios,
    Android,
    Desktop,
}

/// Classify a user-agent string. No user agent (e.g. not running in a
/// browser) counts as desktop.
pub fn detect_os(user_agent: Option<&str>) -> Os {
    match user_agent {
        Some(ua) if IOS_REGEX.is_match(ua) => Os::Ios,
        Some(ua) if ANDROID_REGEX.is_match(ua) => Os::Android,
        _ => Os::Desktop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_os() {
        assert_eq!(
            detect_os(Some(
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
            )),
            Os::Ios
        );
        assert_eq!(detect_os(Some("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)")), Os::Ios);
        assert_eq!(
            detect_os(Some("Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36")),
            Os::Android
        );
        assert_eq!(
            detect_os(Some("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0")),
            Os::Desktop
        );
        assert_eq!(detect_os(None), Os::Desktop);
        assert_eq!(detect_os(Some("")), Os::Desktop);
    }
}
