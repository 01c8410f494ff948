//! Research flow
//!
//! Submits a player name and dispatches on the response: a completed report
//! is returned as is, an ambiguous match is an error, and a pending job is
//! handed to the [`JobPoller`].

use std::sync::Arc;

use scout_client::ResearchApi;
use scout_core::domain::report::Report;
use scout_core::domain::research::{ReportOrigin, ResearchResponse};
use tracing::{debug, info};

use crate::error::{ResearchError, Result};
use crate::progress::{ProgressReporter, ResearchProgress};
use crate::scheduler::JobPoller;
use crate::sleeper::Sleeper;

/// How a report was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeSource {
    /// Returned directly by the submission
    Immediate(ReportOrigin),
    /// Produced by the background job with this id
    Job(String),
}

/// A successfully researched player
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchOutcome {
    pub report: Report,
    pub source: OutcomeSource,
}

/// Runs research requests end to end
pub struct Researcher {
    api: Arc<dyn ResearchApi>,
    poller: JobPoller,
}

impl Researcher {
    /// Creates a researcher whose poller waits on the tokio timer
    pub fn new(api: Arc<dyn ResearchApi>) -> Self {
        let poller = JobPoller::new(Arc::clone(&api));
        Self { api, poller }
    }

    /// Replaces the wait between poll attempts
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.poller = self.poller.with_sleeper(sleeper);
        self
    }

    /// Researches a player by name
    ///
    /// # Arguments
    /// * `player_name` - The name to submit
    /// * `progress` - Receives the queued notice and every non-terminal poll
    ///
    /// # Returns
    /// The report and how it was obtained
    pub async fn research_player(
        &self,
        player_name: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<ResearchOutcome> {
        let player_name = player_name.trim();
        info!("Submitting research for {}", player_name);

        match self.api.submit_research(player_name).await? {
            ResearchResponse::Complete { origin, report } => {
                debug!("Report {} returned immediately ({})", report.id, origin);
                Ok(ResearchOutcome {
                    report,
                    source: OutcomeSource::Immediate(origin),
                })
            }
            ResearchResponse::Ambiguous { candidates } => {
                debug!(
                    "'{}' matched {} players, not polling",
                    player_name,
                    candidates.len()
                );
                Err(ResearchError::Ambiguous {
                    player_name: player_name.to_string(),
                    candidates,
                })
            }
            ResearchResponse::Pending { job_id, message } => {
                info!("Research for {} queued as job {}", player_name, job_id);
                progress.report(ResearchProgress::Queued {
                    job_id: job_id.clone(),
                    message,
                });

                let report = self.poller.poll(&job_id, player_name, progress).await?;
                Ok(ResearchOutcome {
                    report,
                    source: OutcomeSource::Job(job_id),
                })
            }
        }
    }
}
