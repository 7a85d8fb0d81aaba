//! Client configuration types.

use std::collections::HashMap;
use std::time::Duration;

/// Configuration for a lariat client.
///
/// A configuration can carry its own base URL; a URL set on the `#[lariat]`
/// attribute or the generated builder takes precedence over it.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use lariat::ClientConfig;
///
/// let config = ClientConfig::default()
///     .base_url("http://localhost:8080")
///     .timeout(Duration::from_secs(5))
///     .retries(3)
///     .header("Authorization", "Bearer token");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Fallback base URL, used when neither the attribute nor the builder set one.
    pub base_url: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Number of retries after a failed attempt (0 disables retrying).
    pub retries: u32,
    /// Fixed wait between retry attempts.
    pub retry_wait: Duration,
    /// Headers sent with every request unless a call overrides them.
    pub headers: HashMap<String, String>,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            retries: 0,
            retry_wait: Duration::from_secs(1),
            headers: HashMap::new(),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ClientConfig {
    /// Set the fallback base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the whole-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries after a failed attempt.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the fixed wait between retry attempts.
    #[must_use]
    pub const fn retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    /// Add a default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = count;
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }
}
