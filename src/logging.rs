use crate::utils::truncate_str;
use crate::{DeepLinkError, DeepLinkResult};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: String,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".into(),
            log_level: "info".into(),
            console_output: true,
            file_output: false,
        }
    }
}

/// Log a boxed summary of a generated result at info level.
pub fn log_deeplink_card(result: &DeepLinkResult) {
    const CARD_WIDTH: usize = 80;
    const CONTENT_WIDTH: usize = CARD_WIDTH - 12;

    let horizontal_line = "═".repeat(CARD_WIDTH - 2);
    let host = result
        .web_host()
        .unwrap_or_else(|_| "N/A".to_string());

    info!(
        "\n╔{}╗\n\
         Platform: {}\n\
         Web:      {}\n\
         Host:     {}\n\
         iOS:      {}\n\
         Android:  {}\n\
         ╚{}╝",
        horizontal_line,
        result.platform,
        truncate_str(&result.web_url, CONTENT_WIDTH),
        host,
        truncate_str(result.ios.as_deref().unwrap_or("N/A"), CONTENT_WIDTH),
        truncate_str(result.android.as_deref().unwrap_or("N/A"), CONTENT_WIDTH),
        horizontal_line,
    );
}

pub fn setup_logging(config: LogConfig) -> Result<(), DeepLinkError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let mut layers = Vec::new();

    if config.console_output {
        let console_layer = subscriber_fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .compact();
        layers.push(console_layer.boxed());
    }

    if config.file_output {
        std::fs::create_dir_all(&config.log_dir)
            .map_err(|e| DeepLinkError::LoggingError(e.to_string()))?;

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "url-deeplink.log");

        let file_layer = subscriber_fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .with_writer(file_appender);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| DeepLinkError::LoggingError(e.to_string()))?;

    debug!("Logging system initialized with config: {:?}", config);
    Ok(())
}

/// Scoped subscriber at a fixed level, restored when dropped.
pub struct LogLevelGuard {
    _guard: tracing::dispatcher::DefaultGuard,
}

impl LogLevelGuard {
    pub fn set_level(level: &str) -> Self {
        let filter = EnvFilter::new(level);
        let subscriber = tracing_subscriber::registry()
            .with(subscriber_fmt::layer())
            .with(filter);

        LogLevelGuard {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_deep_link;

    #[test]
    fn test_card_logs_under_scoped_level() {
        let _guard = LogLevelGuard::set_level("debug");
        log_deeplink_card(&generate_deep_link("https://youtu.be/dQw4w9WgXcQ"));
        log_deeplink_card(&generate_deep_link("not a url"));
    }

    #[test]
    fn test_setup_logging_creates_log_dir_and_installs_once() {
        let log_dir =
            std::env::temp_dir().join(format!("url-deeplink-logs-{}", std::process::id()));
        let config = LogConfig {
            log_dir: log_dir.clone(),
            log_level: "debug".into(),
            console_output: true,
            file_output: true,
        };

        setup_logging(config).unwrap();
        assert!(log_dir.is_dir());

        generate_deep_link("https://discord.gg/rust");

        // A global subscriber is already installed.
        assert!(matches!(
            setup_logging(LogConfig::default()),
            Err(DeepLinkError::LoggingError(_))
        ));

        let _ = std::fs::remove_dir_all(&log_dir);
    }
}
