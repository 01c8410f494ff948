//! Session token providers
//!
//! Authentication is owned by an external identity service; the client only
//! asks a provider for the current access token before each request.

use async_trait::async_trait;

use crate::error::Result;

/// Supplies the bearer token attached to API requests
#[async_trait]
pub trait SessionTokenProvider: Send + Sync {
    /// Returns the current access token, or `None` for anonymous requests
    async fn access_token(&self) -> Result<Option<String>>;
}

/// Provider that always returns the same token
#[derive(Debug, Clone, Default)]
pub struct StaticToken {
    token: Option<String>,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// A provider that never authenticates
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl From<Option<String>> for StaticToken {
    fn from(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[async_trait]
impl SessionTokenProvider for StaticToken {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}
