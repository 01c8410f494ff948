//! Player registry API endpoints

use scout_core::domain::player::PlayerResolution;
use scout_core::dto::player::{PlayerSearchQuery, PlayerSearchResults, ResolveRequest};

use crate::ScoutingClient;
use crate::error::{ClientError, Result};

impl ScoutingClient {
    // =============================================================================
    // Player Registry
    // =============================================================================

    /// Search the registry by partial name
    pub async fn search_players(&self, query: &PlayerSearchQuery) -> Result<PlayerSearchResults> {
        query.validate().map_err(ClientError::InvalidRequest)?;

        let url = self.endpoint(&["players", "search"])?;
        let response = self
            .authorize(self.client.get(url).query(query))
            .await?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Resolve a name to a single registry player
    ///
    /// Context hints (team, position, external ids) narrow an ambiguous name.
    /// An unresolved result is not an error; its candidates are returned.
    ///
    /// # Example
    /// ```no_run
    /// # use scout_client::ScoutingClient;
    /// # use scout_core::dto::player::{ResolveContext, ResolveRequest};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ScoutingClient::new("http://localhost:8000");
    /// let request = ResolveRequest::new(
    ///     "Will Smith",
    ///     ResolveContext { team: Some("LAD".to_string()), ..Default::default() },
    /// );
    /// if let Some(player) = client.resolve_player(&request).await?.resolved_player() {
    ///     println!("{}", player.full_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_player(&self, request: &ResolveRequest) -> Result<PlayerResolution> {
        request.validate().map_err(ClientError::InvalidRequest)?;

        let url = self.endpoint(&["players", "resolve"])?;
        let response = self
            .authorize(self.client.post(url).json(request))
            .await?
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::dto::player::ResolveContext;

    #[tokio::test]
    async fn test_resolve_rejects_short_name_without_network() {
        let client = ScoutingClient::new("http://127.0.0.1:9");
        let request = ResolveRequest::new("W", ResolveContext::default());
        let err = client.resolve_player(&request).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_search_rejects_oversized_page() {
        let client = ScoutingClient::new("http://127.0.0.1:9");
        let query = PlayerSearchQuery::new("Smith").with_limit(200);
        let err = client.search_players(&query).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
