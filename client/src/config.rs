//! # Client Configuration
//!
//! Base URL and timeout settings for the API client. The backend origin can
//! be overridden with the `ENFOR_API_URL` environment variable.

use std::time::Duration;

/// Default backend origin plus `/api` prefix.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Environment variable that overrides the base URL.
pub const API_URL_ENV: &str = "ENFOR_API_URL";

/// Configuration for [`crate::services::api::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL including the `/api` prefix, without trailing slash.
    pub base_url: String,
    /// Request timeout. Timeouts surface as transport errors.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl ClientConfig {
    /// Build a config for a specific backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            timeout: Duration::from_secs(15),
        }
    }

    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
