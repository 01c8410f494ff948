//! Configuration module
//!
//! Handles CLI configuration: where the scouting API lives, how to
//! authenticate, and how long a single HTTP request may take.

use std::time::Duration;

use anyhow::{Context, Result};
use scout_client::{ScoutingClient, StaticToken};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scouting API (e.g., "http://localhost:8000")
    pub api_url: String,

    /// Bearer token issued by the identity provider
    pub access_token: Option<String>,

    /// Timeout applied to each HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.http_timeout.is_zero() {
            anyhow::bail!("http_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds an API client from this configuration
    pub fn client(&self) -> Result<ScoutingClient> {
        let http = reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ScoutingClient::with_client(&self.api_url, http)
            .with_token_provider(StaticToken::from(self.access_token.clone())))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            access_token: None,
            http_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.access_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Invalid URL should fail
        config.api_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.api_url = String::new();
        assert!(config.validate().is_err());

        config.api_url = "https://scout.example.com".to_string();
        assert!(config.validate().is_ok());

        // Zero timeout should fail
        config.http_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_uses_configured_url() {
        let config = Config {
            api_url: "http://localhost:9000/".to_string(),
            ..Config::default()
        };
        let client = config.client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
