use crate::utils::intent_uri;
use crate::{DeepLinkResult, Platform};
use once_cell::sync::Lazy;
use regex::Regex;

static SPOTIFY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"open\.spotify\.com/(?:intl-[A-Za-z-]+/)?(track|album|artist|playlist|episode|show)/([A-Za-z0-9]+)",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyKind {
    Track,
    Album,
    Artist,
    Playlist,
    Episode,
    Show,
}

impl SpotifyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpotifyKind::Track => "track",
            SpotifyKind::Album => "album",
            SpotifyKind::Artist => "artist",
            SpotifyKind::Playlist => "playlist",
            SpotifyKind::Episode => "episode",
            SpotifyKind::Show => "show",
        }
    }

    fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "track" => Some(SpotifyKind::Track),
            "album" => Some(SpotifyKind::Album),
            "artist" => Some(SpotifyKind::Artist),
            "playlist" => Some(SpotifyKind::Playlist),
            "episode" => Some(SpotifyKind::Episode),
            "show" => Some(SpotifyKind::Show),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyMatch {
    pub kind: SpotifyKind,
    pub id: String,
}

pub fn recognize(url: &str) -> Option<SpotifyMatch> {
    let caps = SPOTIFY_REGEX.captures(url)?;
    Some(SpotifyMatch {
        kind: SpotifyKind::from_path_segment(&caps[1])?,
        id: caps[2].to_string(),
    })
}

pub fn build(web_url: &str, m: &SpotifyMatch) -> DeepLinkResult {
    DeepLinkResult {
        web_url: web_url.to_string(),
        ios: Some(format!("spotify:{}:{}", m.kind.as_str(), m.id)),
        android: Some(intent_uri(
            &format!("{}/{}", m.kind.as_str(), m.id),
            &[
                ("scheme", "spotify"),
                ("package", "com.spotify.music"),
                ("S.browser_fallback_url", web_url),
            ],
        )),
        platform: Platform::Spotify,
    }
}
