//! Research request/response domain types

use serde::{Deserialize, Serialize};

use crate::domain::player::Candidate;
use crate::domain::report::Report;

/// Shortest player name the backend accepts
pub const MIN_PLAYER_NAME_LEN: usize = 2;

/// Longest player name the backend accepts
pub const MAX_PLAYER_NAME_LEN: usize = 100;

/// Request to research a player by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub player_name: String,
}

impl ResearchRequest {
    /// Creates a request with the name trimmed of surrounding whitespace
    pub fn new(player_name: impl AsRef<str>) -> Self {
        Self {
            player_name: player_name.as_ref().trim().to_string(),
        }
    }

    /// Checks the name length against the backend's limits
    pub fn validate(&self) -> Result<(), String> {
        let len = self.player_name.chars().count();
        if len < MIN_PLAYER_NAME_LEN {
            return Err(format!(
                "player name must be at least {} characters",
                MIN_PLAYER_NAME_LEN
            ));
        }
        if len > MAX_PLAYER_NAME_LEN {
            return Err(format!(
                "player name must be at most {} characters",
                MAX_PLAYER_NAME_LEN
            ));
        }
        Ok(())
    }
}

/// Where a completed report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOrigin {
    /// Served from the backend's report cache
    Cached,
    /// Generated synchronously for this request
    Generated,
}

impl std::fmt::Display for ReportOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportOrigin::Cached => write!(f, "cached"),
            ReportOrigin::Generated => write!(f, "generated"),
        }
    }
}

/// Outcome of submitting a research request
///
/// Only [`ResearchResponse::Pending`] leads to polling.
#[derive(Debug, Clone, PartialEq)]
pub enum ResearchResponse {
    /// A report is already available
    Complete {
        origin: ReportOrigin,
        report: Report,
    },
    /// A background job was queued
    Pending { job_id: String, message: String },
    /// The name matched more than one player; no job was created
    Ambiguous { candidates: Vec<Candidate> },
}

impl ResearchResponse {
    pub fn is_pending(&self) -> bool {
        matches!(self, ResearchResponse::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_name() {
        let req = ResearchRequest::new("  Juan Soto\n");
        assert_eq!(req.player_name, "Juan Soto");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_validation_bounds() {
        assert!(ResearchRequest::new("J").validate().is_err());
        assert!(ResearchRequest::new("   ").validate().is_err());
        assert!(ResearchRequest::new("Jo").validate().is_ok());
        assert!(ResearchRequest::new("x".repeat(100)).validate().is_ok());
        assert!(ResearchRequest::new("x".repeat(101)).validate().is_err());
    }
}
