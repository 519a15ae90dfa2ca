//! Client configuration.

use std::time::Duration;

use crate::session::{ProxyConfig, DEFAULT_USER_AGENTS};

/// Default base URL of the marketplace API.
pub const DEFAULT_API_URL: &str = "https://api.leboncoin.fr";

/// Configuration consumed by the client and its session manager.
///
/// Everything here is supplied by the caller; nothing is read from the
/// environment inside the library.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API.
    pub api_url: String,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Maximum number of attempts when the backend signals a block.
    pub max_retries: u32,
    /// Minimum spacing between two consecutive requests.
    pub min_delay: Duration,
    /// Upper bound of the randomized spacing between requests.
    pub max_delay: Duration,
    /// Proxy pool rotated round-robin; empty means direct transport.
    pub proxies: Vec<ProxyConfig>,
    /// User agents sampled uniformly at random per attempt.
    pub user_agents: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 5,
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(3),
            proxies: Vec::new(),
            user_agents: DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry budget for blocked requests.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the minimum and maximum inter-request delay.
    pub fn with_delays(mut self, min_delay: Duration, max_delay: Duration) -> Self {
        self.min_delay = min_delay;
        self.max_delay = max_delay.max(min_delay);
        self
    }

    /// Sets the proxy pool.
    pub fn with_proxies(mut self, proxies: Vec<ProxyConfig>) -> Self {
        self.proxies = proxies;
        self
    }

    /// Sets the user-agent pool.
    pub fn with_user_agents(mut self, user_agents: Vec<String>) -> Self {
        self.user_agents = user_agents;
        self
    }
}
