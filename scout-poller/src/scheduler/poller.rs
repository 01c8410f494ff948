//! Job poller
//!
//! Polls the scouting API for the status of a queued research job until it
//! succeeds, fails, or runs out of attempts. Attempts are strictly
//! sequential; the only suspension point is the inter-attempt delay.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use scout_client::ResearchApi;
use scout_core::domain::job::{JobResultPayload, JobState, JobStatus};
use scout_core::domain::report::Report;
use tracing::debug;

use crate::config::{MAX_POLL_ATTEMPTS, POLL_INTERVAL, elapsed_secs};
use crate::error::{JOB_FAILED_MESSAGE, ResearchError, Result};
use crate::progress::{ProgressReporter, ResearchProgress};
use crate::sleeper::{Sleeper, TokioSleeper};

/// Classification of one status snapshot
#[derive(Debug, PartialEq)]
enum Attempt {
    Succeeded(JobResultPayload),
    Failed(String),
    InProgress(JobState),
}

impl From<JobStatus> for Attempt {
    fn from(status: JobStatus) -> Self {
        if !status.state.is_terminal() {
            return Attempt::InProgress(status.state);
        }

        match (status.state, status.result) {
            (JobState::Success, Some(payload)) => Attempt::Succeeded(payload),
            (JobState::Failed, _) => Attempt::Failed(
                status
                    .error
                    .unwrap_or_else(|| JOB_FAILED_MESSAGE.to_string()),
            ),
            (state, _) => Attempt::InProgress(state),
        }
    }
}

/// Job poller that waits for a research job to reach a terminal state
///
/// A poller refuses to run two loops for the same job id at once; the
/// second caller gets [`ResearchError::AlreadyPolling`].
pub struct JobPoller {
    api: Arc<dyn ResearchApi>,
    sleeper: Arc<dyn Sleeper>,
    in_flight: Mutex<HashSet<String>>,
}

impl JobPoller {
    /// Creates a poller that waits on the tokio timer
    pub fn new(api: Arc<dyn ResearchApi>) -> Self {
        Self {
            api,
            sleeper: Arc::new(TokioSleeper),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Replaces the wait between attempts
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Polls `job_id` until it reaches a terminal state
    ///
    /// # Arguments
    /// * `job_id` - The job returned by a pending research submission
    /// * `subject` - Label used only in progress messages (usually the player name)
    /// * `progress` - Receives one update per non-terminal attempt
    ///
    /// # Returns
    /// The finished report, or the error that ended the loop
    pub async fn poll(
        &self,
        job_id: &str,
        subject: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<Report> {
        let _guard = InFlightGuard::acquire(&self.in_flight, job_id)?;

        for attempt in 0..MAX_POLL_ATTEMPTS {
            let status = self.api.get_job_status(job_id).await.map_err(|e| {
                debug!("Status query for job {} failed on attempt {}: {}", job_id, attempt + 1, e);
                ResearchError::Transport(e)
            })?;

            match Attempt::from(status) {
                Attempt::Succeeded(payload) => {
                    debug!("Job {} succeeded after {} attempt(s)", job_id, attempt + 1);
                    return Ok(payload.into_report(Utc::now()));
                }
                Attempt::Failed(message) => {
                    debug!("Job {} failed: {}", job_id, message);
                    return Err(ResearchError::JobFailed(message));
                }
                Attempt::InProgress(state) => {
                    debug!(
                        "Job {} is {} (attempt {}/{})",
                        job_id,
                        state,
                        attempt + 1,
                        MAX_POLL_ATTEMPTS
                    );

                    progress.report(ResearchProgress::Waiting {
                        job_id: job_id.to_string(),
                        subject: subject.to_string(),
                        attempt,
                        elapsed_secs: elapsed_secs(attempt),
                        state,
                    });

                    if attempt + 1 < MAX_POLL_ATTEMPTS {
                        self.sleeper.sleep(POLL_INTERVAL).await;
                    }
                }
            }
        }

        debug!("Job {} timed out after {} attempts", job_id, MAX_POLL_ATTEMPTS);
        Err(ResearchError::TimedOut {
            attempts: MAX_POLL_ATTEMPTS,
        })
    }

    /// Whether a poll loop for `job_id` is currently running
    pub fn is_polling(&self, job_id: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(job_id)
    }
}

/// Marks a job id as owned by a running poll loop until dropped
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    job_id: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, job_id: &str) -> Result<Self> {
        let mut jobs = set.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !jobs.insert(job_id.to_string()) {
            return Err(ResearchError::AlreadyPolling(job_id.to_string()));
        }

        Ok(Self {
            set,
            job_id: job_id.to_string(),
        })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.job_id);
    }
}
