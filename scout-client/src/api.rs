//! Research API seam
//!
//! The job poller only needs two operations from the backend. They are
//! expressed as a trait so the poller can be driven by the HTTP client in
//! production and by scripted fakes in tests.

use async_trait::async_trait;
use scout_core::domain::job::JobStatus;
use scout_core::domain::research::ResearchResponse;

use crate::ScoutingClient;
use crate::error::Result;

/// Operations the research flow consumes
#[async_trait]
pub trait ResearchApi: Send + Sync {
    /// Submits a player name for research
    async fn submit_research(&self, player_name: &str) -> Result<ResearchResponse>;

    /// Reads the current status of a research job
    ///
    /// Must be free of side effects so it can be called repeatedly.
    async fn get_job_status(&self, job_id: &str) -> Result<JobStatus>;
}

#[async_trait]
impl ResearchApi for ScoutingClient {
    async fn submit_research(&self, player_name: &str) -> Result<ResearchResponse> {
        ScoutingClient::submit_research(self, player_name).await
    }

    async fn get_job_status(&self, job_id: &str) -> Result<JobStatus> {
        ScoutingClient::get_job_status(self, job_id).await
    }
}
