//! Scout HTTP Client
//!
//! A simple, type-safe HTTP client for the fantasy-baseball scouting API.
//!
//! The client covers research submission, job status checks, report lookup,
//! player search and resolution, and health. The [`ResearchApi`] trait exposes the two calls the job poller
//! needs so it can be driven by a scripted fake in tests.
//!
//! # Example
//!
//! ```no_run
//! use scout_client::{ScoutingClient, StaticToken};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ScoutingClient::new("http://localhost:8000")
//!         .with_token_provider(StaticToken::new("my-access-token"));
//!
//!     let status = client.get_job_status("job-42").await?;
//!     println!("Job {} is {}", status.job_id, status.state);
//!     Ok(())
//! }
//! ```

mod api;
pub mod auth;
pub mod error;
mod health;
mod players;
mod reports;
mod research;

// Re-export commonly used types
pub use api::ResearchApi;
pub use auth::{SessionTokenProvider, StaticToken};
pub use error::{ClientError, Result};

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Url};
use scout_core::dto::error::ErrorEnvelope;
use serde::de::DeserializeOwned;

/// Path prefix of every versioned API route
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// HTTP client for the scouting API
///
/// Endpoints are organized into logical groups:
/// - Research submission and job status
/// - Report lookup and listing
/// - Player search and resolution
/// - Health
#[derive(Clone)]
pub struct ScoutingClient {
    /// Base URL of the API (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Source of the bearer token sent with each request
    tokens: Arc<dyn SessionTokenProvider>,
}

impl std::fmt::Debug for ScoutingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoutingClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ScoutingClient {
    /// Create a new anonymous client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use scout_client::ScoutingClient;
    ///
    /// let client = ScoutingClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use scout_client::ScoutingClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ScoutingClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            tokens: Arc::new(StaticToken::anonymous()),
        }
    }

    /// Attach a session-token provider used to authenticate every request
    pub fn with_token_provider(mut self, provider: impl SessionTokenProvider + 'static) -> Self {
        self.tokens = Arc::new(provider);
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Helpers
    // =============================================================================

    /// Build a versioned endpoint URL, percent-encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidRequest(format!("invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!("base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);

        Ok(url)
    }

    /// Attach the bearer token, if the provider has one
    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match self.tokens.access_token().await? {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Ok(request),
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = ErrorEnvelope::message_from(&error_text).unwrap_or(error_text);
            tracing::debug!(status = status.as_u16(), %message, "API returned an error");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ScoutingClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ScoutingClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ScoutingClient::with_client("http://localhost:8000", http_client);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ScoutingClient::new("http://localhost:8000");
        let url = client
            .endpoint(&["scouting", "reports", "Juan Soto"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/scouting/reports/Juan%20Soto"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ScoutingClient::new("https://example.com/scout/");
        let url = client.endpoint(&["health"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/scout/api/v1/health");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let client = ScoutingClient::new("not a url");
        let err = client.endpoint(&["health"]).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_debug_hides_token_provider() {
        let client = ScoutingClient::new("http://localhost:8000")
            .with_token_provider(StaticToken::new("secret"));
        let debug = format!("{:?}", client);
        assert!(debug.contains("localhost:8000"));
        assert!(!debug.contains("secret"));
    }
}
