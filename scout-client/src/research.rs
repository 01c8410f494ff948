//! Research-related API endpoints

use scout_core::domain::job::JobStatus;
use scout_core::domain::research::{ResearchRequest, ResearchResponse};
use scout_core::dto::job::JobStatusBody;
use scout_core::dto::research::ResearchResponseBody;

use crate::ScoutingClient;
use crate::error::{ClientError, Result};

impl ScoutingClient {
    // =============================================================================
    // Research Lifecycle
    // =============================================================================

    /// Submit a player for research
    ///
    /// The name is trimmed and validated locally before any request is sent.
    ///
    /// # Returns
    /// A completed report, a pending job to poll, or a list of ambiguous candidates
    ///
    /// # Example
    /// ```no_run
    /// # use scout_client::ScoutingClient;
    /// # use scout_core::domain::research::ResearchResponse;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ScoutingClient::new("http://localhost:8000");
    /// match client.submit_research("Juan Soto").await? {
    ///     ResearchResponse::Complete { report, .. } => println!("{}", report.summary),
    ///     ResearchResponse::Pending { job_id, .. } => println!("poll {}", job_id),
    ///     ResearchResponse::Ambiguous { candidates } => println!("{} matches", candidates.len()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_research(&self, player_name: &str) -> Result<ResearchResponse> {
        let request = ResearchRequest::new(player_name);
        request.validate().map_err(ClientError::InvalidRequest)?;

        let url = self.endpoint(&["scouting", "research"])?;
        let response = self
            .authorize(self.client.post(url).json(&request))
            .await?
            .send()
            .await?;

        let body: ResearchResponseBody = self.handle_response(response).await?;
        Ok(body.into())
    }

    /// Get the current status of a research job
    ///
    /// This is an idempotent read and is safe to call repeatedly.
    ///
    /// # Arguments
    /// * `job_id` - The opaque job identifier returned by [`Self::submit_research`]
    pub async fn get_job_status(&self, job_id: &str) -> Result<JobStatus> {
        if job_id.trim().is_empty() {
            return Err(ClientError::InvalidRequest("job id cannot be empty".to_string()));
        }

        let url = self.endpoint(&["scouting", "jobs", job_id])?;
        let response = self.authorize(self.client.get(url)).await?.send().await?;

        let mut body: JobStatusBody = self.handle_response(response).await?;
        if body.job_id.is_empty() {
            body.job_id = job_id.to_string();
        }
        JobStatus::try_from(body)
            .map_err(|e| ClientError::ParseError(format!("Invalid job result: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_rejects_short_name_without_network() {
        // Port 9 (discard) is never contacted: validation fails first
        let client = ScoutingClient::new("http://127.0.0.1:9");
        let err = client.submit_research(" J ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_job_status_rejects_blank_id() {
        let client = ScoutingClient::new("http://127.0.0.1:9");
        let err = client.get_job_status("  ").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
