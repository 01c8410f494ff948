//! Error types for the research flow

use scout_client::ClientError;
use scout_core::domain::player::Candidate;
use thiserror::Error;

/// Message used when a failed job carries no error text
pub const JOB_FAILED_MESSAGE: &str = "Research job failed";

/// Message used when a job never reaches a terminal state
pub const TIMED_OUT_MESSAGE: &str = "Research timed out. Please try again.";

/// Result type alias for research operations
pub type Result<T> = std::result::Result<T, ResearchError>;

/// Every way a research request can end without a report
#[derive(Debug, Error)]
pub enum ResearchError {
    /// The name matched several players; resubmit with a more specific name
    #[error("Multiple players match '{player_name}'. Please be more specific.")]
    Ambiguous {
        player_name: String,
        candidates: Vec<Candidate>,
    },

    /// The backend reported the job as failed
    #[error("{0}")]
    JobFailed(String),

    /// No terminal state within the attempt ceiling
    #[error("Research timed out. Please try again.")]
    TimedOut { attempts: u32 },

    /// A request to the API could not be completed
    #[error("{0}")]
    Transport(#[from] ClientError),

    /// Another poll loop already owns this job
    #[error("Job {0} is already being polled")]
    AlreadyPolling(String),
}

impl ResearchError {
    /// Candidates attached to an ambiguous-match error
    pub fn candidates(&self) -> Option<&[Candidate]> {
        match self {
            ResearchError::Ambiguous { candidates, .. } => Some(candidates),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ResearchError::TimedOut { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_and_failure_messages_differ() {
        let timeout = ResearchError::TimedOut { attempts: 60 };
        let failed = ResearchError::JobFailed(JOB_FAILED_MESSAGE.to_string());
        assert_eq!(timeout.to_string(), TIMED_OUT_MESSAGE);
        assert_eq!(failed.to_string(), JOB_FAILED_MESSAGE);
        assert_ne!(timeout.to_string(), failed.to_string());
        assert!(timeout.is_timeout());
        assert!(!failed.is_timeout());
    }

    #[test]
    fn test_transport_error_keeps_underlying_message() {
        let err = ResearchError::from(ClientError::api_error(503, "Jobs service unavailable"));
        assert_eq!(
            err.to_string(),
            "API error (status 503): Jobs service unavailable"
        );
    }
}
