//! Gateway configuration loaded from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where the identity service lives and how long requests may take.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Base URL of the identity service, without a trailing slash.
    pub base_url: String,
    /// Bounded per-request deadline; expiry surfaces as `AuthError::Timeout`.
    pub timeout: Duration,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Load from `CAMPUSGATE_API_URL` and `CAMPUSGATE_TIMEOUT_MS`,
    /// falling back to defaults when unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("CAMPUSGATE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout_ms = env_parse("CAMPUSGATE_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);
        Self::new(base_url).with_timeout(Duration::from_millis(timeout_ms))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an absolute API path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
