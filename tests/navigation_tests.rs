use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url_deeplink::{
    detect_os, open_link, DeepLinkError, NavigationTarget, Navigator, OpenLinkOptions,
    OpenOutcome, Os,
};

#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<(String, NavigationTarget)>>,
    fail: bool,
}

impl RecordingNavigator {
    fn failing() -> Self {
        Self {
            visits: Mutex::default(),
            fail: true,
        }
    }

    fn visits(&self) -> Vec<(String, NavigationTarget)> {
        self.visits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, url: &str, target: NavigationTarget) -> Result<(), DeepLinkError> {
        if self.fail {
            return Err(DeepLinkError::NavigationFailed {
                target: url.to_string(),
                message: "blocked".to_string(),
            });
        }
        self.visits.lock().unwrap().push((url.to_string(), target));
        Ok(())
    }
}

const VIDEO_URL: &str = "https://youtu.be/dQw4w9WgXcQ";

#[tokio::test(start_paused = true)]
async fn test_ios_opens_deep_link_then_falls_back() {
    let navigator = Arc::new(RecordingNavigator::default());
    let options = OpenLinkOptions::default();

    let outcome = open_link(navigator.clone(), VIDEO_URL, Os::Ios, &options)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        OpenOutcome::DeepLink {
            link: "vnd.youtube://watch?v=dQw4w9WgXcQ".to_string(),
            fallback_scheduled: true,
        }
    );
    assert_eq!(
        navigator.visits(),
        vec![(
            "vnd.youtube://watch?v=dQw4w9WgXcQ".to_string(),
            NavigationTarget::CurrentTab
        )]
    );

    tokio::time::sleep(Duration::from_millis(2499)).await;
    assert_eq!(navigator.visits().len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(
        navigator.visits()[1],
        (VIDEO_URL.to_string(), NavigationTarget::CurrentTab)
    );
}

#[tokio::test(start_paused = true)]
async fn test_android_fallback_in_new_tab_with_custom_delay() {
    let navigator = Arc::new(RecordingNavigator::default());
    let options = OpenLinkOptions::new()
        .with_fallback_delay(Duration::from_millis(500))
        .with_open_in_new_tab(true);

    let outcome = open_link(
        navigator.clone(),
        "https://www.reddit.com/r/rust",
        Os::Android,
        &options,
    )
    .await
    .unwrap();

    assert!(matches!(outcome, OpenOutcome::DeepLink { fallback_scheduled: true, .. }));

    tokio::time::sleep(Duration::from_millis(501)).await;
    assert_eq!(
        navigator.visits(),
        vec![
            (
                "intent://r/rust#Intent;scheme=reddit;package=com.reddit.android;end".to_string(),
                NavigationTarget::CurrentTab
            ),
            (
                "https://www.reddit.com/r/rust".to_string(),
                NavigationTarget::NewTab
            ),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_no_fallback_when_disabled() {
    let navigator = Arc::new(RecordingNavigator::default());
    let options = OpenLinkOptions::new().with_fallback_to_web(false);

    let outcome = open_link(navigator.clone(), VIDEO_URL, Os::Ios, &options)
        .await
        .unwrap();

    assert!(matches!(outcome, OpenOutcome::DeepLink { fallback_scheduled: false, .. }));

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(navigator.visits().len(), 1);
}

#[tokio::test]
async fn test_desktop_goes_straight_to_web() {
    let navigator = Arc::new(RecordingNavigator::default());
    let options = OpenLinkOptions::new().with_open_in_new_tab(true);

    let outcome = open_link(navigator.clone(), VIDEO_URL, Os::Desktop, &options)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        OpenOutcome::Web {
            url: VIDEO_URL.to_string()
        }
    );
    assert_eq!(
        navigator.visits(),
        vec![(VIDEO_URL.to_string(), NavigationTarget::NewTab)]
    );
}

#[tokio::test]
async fn test_unknown_url_on_mobile_goes_to_web() {
    let navigator = Arc::new(RecordingNavigator::default());
    let os = detect_os(Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"));

    let outcome = open_link(
        navigator.clone(),
        " https://example.com/page ",
        os,
        &OpenLinkOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        OpenOutcome::Web {
            url: "https://example.com/page".to_string()
        }
    );
    assert_eq!(navigator.visits().len(), 1);
}

#[tokio::test]
async fn test_navigator_errors_propagate() {
    let navigator: Arc<dyn Navigator> = Arc::new(RecordingNavigator::failing());

    let result = open_link(navigator, VIDEO_URL, Os::Android, &OpenLinkOptions::default()).await;

    match result {
        Err(DeepLinkError::NavigationFailed { target, message }) => {
            assert!(target.starts_with("intent://watch?v=dQw4w9WgXcQ"));
            assert_eq!(message, "blocked");
        }
        other => panic!("Expected NavigationFailed, got {other:?}"),
    }
}
