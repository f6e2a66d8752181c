//! Application Configuration
//!
//! Built once at startup from the page's own location. There are no
//! environment variables or stored settings.

use std::time::Duration;

use crate::browser;

/// Used when the page has no usable origin (e.g. `file://`)
const FALLBACK_API_BASE: &str = "http://127.0.0.1:5001";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the API paths are resolved against
    pub api_base: String,
    /// Staff dashboard refresh period
    pub poll_interval: Duration,
    /// Pause before leaving the tracking page after a cancellation
    pub refund_redirect_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            poll_interval: Duration::from_millis(5000),
            refund_redirect_delay: Duration::from_millis(1200),
        }
    }
}

impl AppConfig {
    pub fn from_window() -> Self {
        let mut config = Self::default();
        if let Some(origin) = browser::origin().filter(|o| is_http_origin(o)) {
            config.api_base = origin;
        }
        log::debug!("[CONFIG] API base {}", config.api_base);
        config
    }
}

/// `"null"` is what opaque origins report
fn is_http_origin(origin: &str) -> bool {
    origin.starts_with("http://") || origin.starts_with("https://")
}
