use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod error;
#[cfg(feature = "logging")]
mod logging;
mod navigation;
mod os;
pub mod platforms;
mod registry;
mod utils;

pub use error::DeepLinkError;
#[cfg(feature = "logging")]
pub use logging::{log_deeplink_card, setup_logging, LogConfig, LogLevelGuard};
pub use navigation::{
    open_link, NavigationTarget, Navigator, OpenLinkOptions, OpenOutcome, DEFAULT_FALLBACK_DELAY,
};
pub use os::{detect_os, Os};
pub use registry::{generate_deep_link, DeepLinkGenerator, Handler, DEFAULT_HANDLERS};

/// The outcome of deep link generation for a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkResult {
    pub web_url: String,
    pub ios: Option<String>,
    pub android: Option<String>,
    pub platform: Platform,
}

impl DeepLinkResult {
    /// The deep link to try on the given OS, if one was built.
    /// Desktop never gets a deep link.
    pub fn link_for(&self, os: Os) -> Option<&str> {
        match os {
            Os::Ios => self.ios.as_deref(),
            Os::Android => self.android.as_deref(),
            Os::Desktop => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.platform == Platform::Unknown
    }

    /// Scheme, host and port of the web URL, e.g. `https://youtu.be/`.
    pub fn web_host(&self) -> Result<String, DeepLinkError> {
        Ok(utils::pickup_host_from_url(&self.web_url)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Linkedin,
    Instagram,
    Facebook,
    Spotify,
    Whatsapp,
    Threads,
    Discord,
    Reddit,
    Unknown,
}

impl Platform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Spotify => "spotify",
            Platform::Whatsapp => "whatsapp",
            Platform::Threads => "threads",
            Platform::Discord => "discord",
            Platform::Reddit => "reddit",
            Platform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DeepLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(Platform::Youtube),
            "linkedin" => Ok(Platform::Linkedin),
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            "spotify" => Ok(Platform::Spotify),
            "whatsapp" => Ok(Platform::Whatsapp),
            "threads" => Ok(Platform::Threads),
            "discord" => Ok(Platform::Discord),
            "reddit" => Ok(Platform::Reddit),
            "unknown" => Ok(Platform::Unknown),
            other => Err(DeepLinkError::UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trips_through_str() {
        for platform in [Platform::Youtube, Platform::Whatsapp, Platform::Unknown] {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_link_for_os() {
        let result = DeepLinkResult {
            web_url: "https://youtu.be/dQw4w9WgXcQ".into(),
            ios: Some("vnd.youtube://watch?v=dQw4w9WgXcQ".into()),
            android: None,
            platform: Platform::Youtube,
        };

        assert_eq!(
            result.link_for(Os::Ios),
            Some("vnd.youtube://watch?v=dQw4w9WgXcQ")
        );
        assert_eq!(result.link_for(Os::Android), None);
        assert_eq!(result.link_for(Os::Desktop), None);
        assert_eq!(result.web_host().unwrap(), "https://youtu.be/");
    }
}
