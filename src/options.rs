// ABOUTME: Client options, builder, and CLI-level configuration validation.
// ABOUTME: Validation collects every problem before any I/O, in a fixed order.

use std::time::Duration;

use crate::client::Client;
use crate::error::ConfigError;

/// Configuration for a [`Client`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Overall deadline for network acquisition. Zero means no explicit
    /// deadline, leaving the transport's own defaults in place. File and
    /// stdin input ignore this entirely.
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::ZERO,
            user_agent: "sift/0.1".to_string(),
            http_client: None,
        }
    }
}

/// Builder for constructing [`Client`] instances with custom settings.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the network acquisition deadline. Zero keeps the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client instead of building one from the options.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

/// Validate raw command-line configuration before any I/O is attempted.
///
/// Every problem is collected, not just the first, so the caller can report
/// the whole list at once. Order is fixed: the timeout check first, then the
/// value list.
pub fn validate(timeout_secs: i64, values: &[String]) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if timeout_secs < 0 {
        errors.push(ConfigError::NegativeTimeout);
    }
    if values.is_empty() {
        errors.push(ConfigError::EmptyValues);
    }
    errors
}
