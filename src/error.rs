use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum DeepLinkError {
    #[error("Failed to parse URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unknown platform tag: {0}")]
    UnknownPlatform(String),

    #[error("Navigation to {target} failed: {message}")]
    NavigationFailed { target: String, message: String },

    #[error("Logging setup failed: {0}")]
    LoggingError(String),
}

impl DeepLinkError {
    pub fn log(&self) {
        match self {
            DeepLinkError::InvalidUrl(e) => {
                warn!(error = %e, "URL parsing failed");
            }
            DeepLinkError::UnknownPlatform(tag) => {
                warn!(tag = %tag, "Unrecognized platform tag");
            }
            DeepLinkError::NavigationFailed { target, message } => {
                error!(
                    target_url = %target,
                    error = %message,
                    "Navigation failed"
                );
            }
            DeepLinkError::LoggingError(e) => {
                warn!(error = %e, "Logging setup failed");
            }
        }
    }
}
