use crate::utils::{intent_uri, strip_protocol_and_www};
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

static DISCORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"discord\.(?:com/channels/([^/]+)/([^/?#]+)|gg/([^/?#]+)|com/invite/([^/?#]+))",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscordMatch {
    Channel { guild_id: String, channel_id: String },
    Invite { code: String },
}

pub fn recognize(url: &str) -> Option<DiscordMatch> {
    let caps = DISCORD_REGEX.captures(url)?;

    // Channel captures take priority over either invite form.
    if let (Some(guild), Some(channel)) = (caps.get(1), caps.get(2)) {
        return Some(DiscordMatch::Channel {
            guild_id: guild.as_str().to_string(),
            channel_id: channel.as_str().to_string(),
        });
    }

    caps.get(3)
        .or_else(|| caps.get(4))
        .map(|code| DiscordMatch::Invite {
            code: code.as_str().to_string(),
        })
}

pub fn build(web_url: &str, m: &DiscordMatch) -> DeepLinkResult {
    let path = match m {
        DiscordMatch::Channel {
            guild_id,
            channel_id,
        } => format!("channels/{guild_id}/{channel_id}"),
        DiscordMatch::Invite { code } => format!("invite/{code}"),
    };

    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("discord://{path}")),
        android: Some(intent_uri(
            strip_protocol_and_www(web_url),
            &[("scheme", "discord"), ("package", "com.discord")],
        )),
        platform: Platform::Discord,
    }
}
