use crate::platforms::{
    discord, facebook, instagram, linkedin, reddit, spotify, threads, unknown, whatsapp, youtube,
};
use crate::{DeepLinkResult, Platform};
use std::borrow::Cow;
#[cfg(feature = "logging")]
use tracing::{debug, instrument};

/// One entry of the handler table.
///
/// Each variant pairs a platform's `recognize` with its own `build`, so a
/// match can only ever be handed to the builder that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    Youtube,
    Linkedin,
    Instagram,
    Facebook,
    Spotify,
    Whatsapp,
    Threads,
    Discord,
    Reddit,
}

/// Default dispatch order. Earlier entries shadow later ones.
pub const DEFAULT_HANDLERS: [Handler; 9] = [
    Handler::Youtube,
    Handler::Linkedin,
    Handler::Instagram,
    Handler::Facebook,
    Handler::Spotify,
    Handler::Whatsapp,
    Handler::Threads,
    Handler::Discord,
    Handler::Reddit,
];

impl Handler {
    pub const fn platform(&self) -> Platform {
        match self {
            Handler::Youtube => Platform::Youtube,
            Handler::Linkedin => Platform::Linkedin,
            Handler::Instagram => Platform::Instagram,
            Handler::Facebook => Platform::Facebook,
            Handler::Spotify => Platform::Spotify,
            Handler::Whatsapp => Platform::Whatsapp,
            Handler::Threads => Platform::Threads,
            Handler::Discord => Platform::Discord,
            Handler::Reddit => Platform::Reddit,
        }
    }

    pub fn recognizes(&self, url: &str) -> bool {
        match self {
            Handler::Youtube => youtube::recognize(url).is_some(),
            Handler::Linkedin => linkedin::recognize(url).is_some(),
            Handler::Instagram => instagram::recognize(url).is_some(),
            Handler::Facebook => facebook::recognize(url).is_some(),
            Handler::Spotify => spotify::recognize(url).is_some(),
            Handler::Whatsapp => whatsapp::recognize(url).is_some(),
            Handler::Threads => threads::recognize(url).is_some(),
            Handler::Discord => discord::recognize(url).is_some(),
            Handler::Reddit => reddit::recognize(url).is_some(),
        }
    }

    /// Recognize `url` and, on a match, build the result from that match.
    pub fn try_build(&self, url: &str) -> Option<DeepLinkResult> {
        match self {
            Handler::Youtube => youtube::recognize(url).map(|m| youtube::build(url, &m)),
            Handler::Linkedin => linkedin::recognize(url).map(|m| linkedin::build(url, &m)),
            Handler::Instagram => instagram::recognize(url).map(|m| instagram::build(url, &m)),
            Handler::Facebook => facebook::recognize(url).map(|m| facebook::build(url, &m)),
            Handler::Spotify => spotify::recognize(url).map(|m| spotify::build(url, &m)),
            Handler::Whatsapp => whatsapp::recognize(url).map(|m| whatsapp::build(url, &m)),
            Handler::Threads => threads::recognize(url).map(|m| threads::build(url, &m)),
            Handler::Discord => discord::recognize(url).map(|m| discord::build(url, &m)),
            Handler::Reddit => reddit::recognize(url).map(|m| reddit::build(url, &m)),
        }
    }
}

/// Ordered dispatcher over a handler table.
#[derive(Debug, Clone)]
pub struct DeepLinkGenerator {
    handlers: Cow<'static, [Handler]>,
}

impl Default for DeepLinkGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DeepLinkGenerator {
    /// Generator over [`DEFAULT_HANDLERS`].
    pub const fn new() -> Self {
        Self {
            handlers: Cow::Borrowed(&DEFAULT_HANDLERS),
        }
    }

    /// Generator with a caller-chosen handler order. Handlers left out are
    /// never tried.
    pub fn with_handlers(handlers: Vec<Handler>) -> Self {
        Self {
            handlers: Cow::Owned(handlers),
        }
    }

    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    /// Trims `url`, then returns the first handler's result, or the unknown
    /// result when nothing matches.
    #[cfg_attr(feature = "logging", instrument(level = "debug", skip(self)))]
    pub fn generate(&self, url: &str) -> DeepLinkResult {
        let web_url = url.trim();

        for handler in self.handlers.iter() {
            if let Some(result) = handler.try_build(web_url) {
                #[cfg(feature = "logging")]
                debug!(platform = %result.platform, "Matched platform handler");
                return result;
            }
        }

        #[cfg(feature = "logging")]
        debug!("No handler matched, using web fallback");
        unknown::build(web_url)
    }
}

static DEFAULT_GENERATOR: DeepLinkGenerator = DeepLinkGenerator::new();

/// Generate deep links for `url` with the default handler order.
pub fn generate_deep_link(url: &str) -> DeepLinkResult {
    DEFAULT_GENERATOR.generate(url)
}
