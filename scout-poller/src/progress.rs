//! Progress reporting
//!
//! The poller never renders anything itself. It hands each intermediate
//! state to a [`ProgressReporter`] chosen by the caller.

use scout_core::domain::job::JobState;

/// An intermediate step of a research request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearchProgress {
    /// The backend accepted the request and queued a job
    Queued { job_id: String, message: String },
    /// A status query returned a non-terminal state
    Waiting {
        job_id: String,
        subject: String,
        /// Zero-based attempt index
        attempt: u32,
        elapsed_secs: u64,
        state: JobState,
    },
}

impl ResearchProgress {
    /// One-line human readable description
    pub fn message(&self) -> String {
        match self {
            ResearchProgress::Queued { message, .. } => message.clone(),
            ResearchProgress::Waiting {
                subject,
                elapsed_secs,
                ..
            } => format!("Researching {}... ({}s)", subject, elapsed_secs),
        }
    }

    pub fn job_id(&self) -> &str {
        match self {
            ResearchProgress::Queued { job_id, .. } | ResearchProgress::Waiting { job_id, .. } => {
                job_id
            }
        }
    }
}

/// Receives progress updates while a research request is in flight
pub trait ProgressReporter: Send + Sync {
    fn report(&self, progress: ResearchProgress);
}

impl<F> ProgressReporter for F
where
    F: Fn(ResearchProgress) + Send + Sync,
{
    fn report(&self, progress: ResearchProgress) {
        self(progress)
    }
}

/// Reporter that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _progress: ResearchProgress) {}
}
