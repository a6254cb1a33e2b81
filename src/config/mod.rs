//! Configuration management for the Mattermost client.
//!
//! Supports configuration via explicit values, environment variables, and a
//! builder pattern.

use crate::errors::{ConfigurationError, MattermostResult};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Configuration for the Mattermost client
#[derive(Clone)]
pub struct MattermostConfig {
    /// Location of the server, e.g. `http://localhost:8065`
    pub base_url: Url,
    /// Bearer token; requests are unauthenticated when absent
    pub(crate) token: Option<SecretString>,
    /// Request timeout
    pub timeout: Duration,
    /// Headers copied onto every request
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for MattermostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MattermostConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for MattermostConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(crate::DEFAULT_BASE_URL).unwrap(),
            token: None,
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }
}

impl MattermostConfig {
    /// Create a new configuration builder
    pub fn builder() -> MattermostConfigBuilder {
        MattermostConfigBuilder::new()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `MATTERMOST_URL`, `MATTERMOST_TOKEN`, and `MATTERMOST_TIMEOUT`
    /// (seconds).
    pub fn from_env() -> MattermostResult<Self> {
        let mut builder = MattermostConfigBuilder::new();

        if let Ok(url) = std::env::var("MATTERMOST_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(token) = std::env::var("MATTERMOST_TOKEN") {
            builder = builder.token(&token);
        }

        if let Ok(timeout) = std::env::var("MATTERMOST_TIMEOUT") {
            if let Some(duration) = parse_timeout_secs(&timeout) {
                builder = builder.timeout(duration);
            }
        }

        Ok(builder.build())
    }

    /// Get the configured token if available
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret().as_str())
    }

    /// The versioned API root, e.g. `http://localhost:8065/api/v4`
    pub fn api_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}{}", base, crate::API_URL_SUFFIX)
    }

    /// Build the full URL for a route fragment
    pub fn build_url(&self, route: &str) -> String {
        format!("{}{}", self.api_url(), route)
    }
}

fn parse_timeout_secs(value: &str) -> Option<Duration> {
    match value.parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!(value, "unparseable MATTERMOST_TIMEOUT, keeping default");
            None
        }
    }
}

/// Builder for [`MattermostConfig`]
#[derive(Default)]
pub struct MattermostConfigBuilder {
    config: MattermostConfig,
}

impl MattermostConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: MattermostConfig::default(),
        }
    }

    /// Set the server base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url = Url::parse(url.trim_end_matches('/'))
            .map_err(|e| ConfigurationError::InvalidBaseUrl(e.to_string()))?;
        Ok(self)
    }

    /// Set the bearer token
    pub fn token(mut self, token: &str) -> Self {
        self.config.token = Some(SecretString::new(token.to_string()));
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: &str, value: &str) -> Result<Self, ConfigurationError> {
        let header_name = name
            .parse::<http::header::HeaderName>()
            .map_err(|_| ConfigurationError::InvalidHeader {
                name: name.to_string(),
            })?;
        let header_value =
            value
                .parse::<http::header::HeaderValue>()
                .map_err(|_| ConfigurationError::InvalidHeader {
                    name: name.to_string(),
                })?;
        self.config.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> MattermostConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = MattermostConfigBuilder::new()
            .base_url("http://localhost:8065")
            .unwrap()
            .token("abc123token")
            .timeout(Duration::from_secs(60))
            .build();

        assert_eq!(config.token(), Some("abc123token"));
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_api_url_suffix() {
        let config = MattermostConfigBuilder::new()
            .base_url("http://localhost:8065/")
            .unwrap()
            .build();

        assert_eq!(config.api_url(), "http://localhost:8065/api/v4");
        assert_eq!(
            config.build_url("/users/me"),
            "http://localhost:8065/api/v4/users/me"
        );
    }

    #[test]
    fn test_timeout_parsing_keeps_default_on_garbage() {
        assert_eq!(parse_timeout_secs("45"), Some(Duration::from_secs(45)));
        assert_eq!(parse_timeout_secs("ten seconds"), None);
        assert_eq!(parse_timeout_secs(""), None);
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(MattermostConfigBuilder::new().base_url("not a url").is_err());
    }

    #[test]
    fn test_token_is_redacted_in_debug() {
        let config = MattermostConfigBuilder::new().token("supersecret").build();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("supersecret"));
    }
}
