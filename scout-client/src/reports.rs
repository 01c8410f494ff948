//! Report-related API endpoints

use scout_core::domain::report::Report;
use scout_core::dto::report::{ReportList, ReportListQuery};

use crate::ScoutingClient;
use crate::error::{ClientError, Result};

impl ScoutingClient {
    // =============================================================================
    // Report Lookup
    // =============================================================================

    /// Get the cached report for a player
    ///
    /// # Arguments
    /// * `player_name` - The player name, matched case-insensitively by the API
    /// * `include_expired` - Also return a report past its expiration time
    ///
    /// # Returns
    /// The report, or a [`ClientError::NotFound`] when none exists
    pub async fn get_report(&self, player_name: &str, include_expired: bool) -> Result<Report> {
        let name = player_name.trim();
        if name.is_empty() {
            return Err(ClientError::InvalidRequest(
                "player name cannot be empty".to_string(),
            ));
        }

        let url = self.endpoint(&["scouting", "reports", name])?;
        let request = self
            .client
            .get(url)
            .query(&[("include_expired", include_expired)]);
        let response = self.authorize(request).await?.send().await?;

        match self.handle_response::<Report>(response).await {
            Err(e) if e.is_not_found() => Err(ClientError::NotFound(format!(
                "no report for '{}'",
                name
            ))),
            other => other,
        }
    }

    /// List recent reports, newest first
    ///
    /// # Arguments
    /// * `query` - Paging and expiry filter
    pub async fn list_reports(&self, query: ReportListQuery) -> Result<ReportList> {
        query.validate().map_err(ClientError::InvalidRequest)?;

        let url = self.endpoint(&["scouting", "reports"])?;
        let response = self
            .authorize(self.client.get(url).query(&query))
            .await?
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_reports_validates_limit() {
        let client = ScoutingClient::new("http://127.0.0.1:9");
        let query = ReportListQuery {
            limit: 500,
            ..Default::default()
        };
        let err = client.list_reports(query).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_get_report_rejects_blank_name() {
        let client = ScoutingClient::new("http://127.0.0.1:9");
        let err = client.get_report("   ", false).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
