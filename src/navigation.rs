use crate::{generate_deep_link, DeepLinkError, Os};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    CurrentTab,
    NewTab,
}

/// Whatever actually changes the page: a webview bridge, a browser binding,
/// a test recorder.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, url: &str, target: NavigationTarget) -> Result<(), DeepLinkError>;
}

#[derive(Debug, Clone)]
pub struct OpenLinkOptions {
    /// Schedule a web navigation after trying a deep link (default: true)
    pub fallback_to_web: bool,
    /// How long the app gets to intercept the deep link (default: 2.5s)
    pub fallback_delay: Duration,
    /// Open the web URL in a new tab instead of the current one (default: false)
    pub open_in_new_tab: bool,
}

impl Default for OpenLinkOptions {
    fn default() -> Self {
        Self {
            fallback_to_web: true,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            open_in_new_tab: false,
        }
    }
}

impl OpenLinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_to_web(mut self, fallback_to_web: bool) -> Self {
        self.fallback_to_web = fallback_to_web;
        self
    }

    pub fn with_fallback_delay(mut self, fallback_delay: Duration) -> Self {
        self.fallback_delay = fallback_delay;
        self
    }

    pub fn with_open_in_new_tab(mut self, open_in_new_tab: bool) -> Self {
        self.open_in_new_tab = open_in_new_tab;
        self
    }

    fn web_target(&self) -> NavigationTarget {
        if self.open_in_new_tab {
            NavigationTarget::NewTab
        } else {
            NavigationTarget::CurrentTab
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Navigated to a deep link; the web fallback may follow later.
    DeepLink {
        link: String,
        fallback_scheduled: bool,
    },
    /// Navigated straight to the web URL.
    Web { url: String },
}

/// Open `url` in the native app when `os` has a deep link for it, otherwise
/// on the web.
///
/// A deep link always opens in the current tab. When a fallback is
/// scheduled it runs on the tokio runtime after `fallback_delay` and cannot
/// be cancelled; its navigation errors are logged, not returned.
#[instrument(level = "debug", skip(navigator, options))]
pub async fn open_link<N>(
    navigator: Arc<N>,
    url: &str,
    os: Os,
    options: &OpenLinkOptions,
) -> Result<OpenOutcome, DeepLinkError>
where
    N: Navigator + ?Sized + 'static,
{
    let result = generate_deep_link(url);
    let web_target = options.web_target();

    let Some(link) = result.link_for(os).map(str::to_string) else {
        debug!(platform = %result.platform, "No deep link for this OS, opening web URL");
        navigator.navigate(&result.web_url, web_target).await?;
        return Ok(OpenOutcome::Web {
            url: result.web_url,
        });
    };

    debug!(platform = %result.platform, link = %link, "Opening deep link");
    navigator
        .navigate(&link, NavigationTarget::CurrentTab)
        .await?;

    if options.fallback_to_web {
        let delay = options.fallback_delay;
        let web_url = result.web_url;
        debug!(delay_ms = delay.as_millis() as u64, "Scheduling web fallback");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = navigator.navigate(&web_url, web_target).await {
                e.log();
            }
        });
    }

    Ok(OpenOutcome::DeepLink {
        link,
        fallback_scheduled: options.fallback_to_web,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = OpenLinkOptions::new()
            .with_fallback_to_web(false)
            .with_fallback_delay(Duration::from_millis(100))
            .with_open_in_new_tab(true);

        assert!(!options.fallback_to_web);
        assert_eq!(options.fallback_delay, Duration::from_millis(100));
        assert_eq!(options.web_target(), NavigationTarget::NewTab);
        assert_eq!(OpenLinkOptions::default().fallback_delay, DEFAULT_FALLBACK_DELAY);
        assert_eq!(
            OpenLinkOptions::default().web_target(),
            NavigationTarget::CurrentTab
        );
    }
}
