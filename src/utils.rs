use once_cell::sync::Lazy;
use regex::Regex;
use url::{ParseError, Url};

static PROTOCOL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());
static PROTOCOL_WWW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(?:www\.)?").unwrap());

/// Drops a leading `http://` or `https://`.
pub fn strip_protocol(url: &str) -> &str {
    match PROTOCOL_REGEX.find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    }
}

/// Like [`strip_protocol`], also dropping a `www.` right after the scheme.
pub fn strip_protocol_and_www(url: &str) -> &str {
    match PROTOCOL_WWW_REGEX.find(url) {
        Some(m) => &url[m.end()..],
        None => url,
    }
}

/// Builds an Android intent URI: `intent://<path>#Intent;<extras>;end`.
pub fn intent_uri(path: &str, extras: &[(&str, &str)]) -> String {
    let mut uri = format!("intent://{path}#Intent;");
    for (key, value) in extras {
        uri.push_str(key);
        uri.push('=');
        uri.push_str(value);
        uri.push(';');
    }
    uri.push_str("end");
    uri
}

/// Safely truncate a string, ensuring it is not truncated in the middle of multi-byte characters
///
/// The output's display width never exceeds `max_width`, ellipsis included.
#[cfg(feature = "logging")]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);

        if current_width + char_width + 3 > max_width {
            break;
        }

        result.push(c);
        current_width += char_width;
    }

    result.push_str("...");
    result
}

pub fn pickup_host_from_url(url: &str) -> Result<String, ParseError> {
    let parsed_url = Url::parse(url)?;
    let scheme = parsed_url.scheme();
    let host = parsed_url.host_str().ok_or(ParseError::EmptyHost)?;

    let port = parsed_url
        .port()
        .map(|x| format!(":{x}"))
        .unwrap_or_default();

    Ok(format!("{scheme}://{host}{port}/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_protocol() {
        assert_eq!(strip_protocol("https://www.linkedin.com/in/x"), "www.linkedin.com/in/x");
        assert_eq!(strip_protocol("http://threads.net/@a"), "threads.net/@a");
        assert_eq!(strip_protocol("threads.net/@a"), "threads.net/@a");
        assert_eq!(strip_protocol_and_www("https://www.discord.gg/abc"), "discord.gg/abc");
        assert_eq!(strip_protocol_and_www("discord.gg/abc"), "discord.gg/abc");
    }

    #[test]
    fn test_intent_uri() {
        assert_eq!(
            intent_uri("r/rust", &[("scheme", "reddit"), ("package", "com.reddit.android")]),
            "intent://r/rust#Intent;scheme=reddit;package=com.reddit.android;end"
        );
    }

    #[test]
    fn test_pickup_host_from_url() {
        assert_eq!(
            pickup_host_from_url("http://localhost:8080/a?b=c").unwrap(),
            "http://localhost:8080/"
        );
        assert!(pickup_host_from_url("not a url").is_err());
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Hello, world!", 10), "Hello, ...");
        assert_eq!(truncate_str("你好，世界！", 8), "你好...");
        assert_eq!(truncate_str("Hi!", 10), "Hi!");
    }
}
