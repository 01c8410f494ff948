//! Research job domain types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::report::{
    REPORT_TTL_HOURS, Report, Source, TokenUsage, normalize_player_name,
};

/// State of a background research job
///
/// The backend spells failure both as `failed` and `failure`; both map to
/// [`JobState::Failed`]. Unrecognized states are kept verbatim in
/// [`JobState::Other`] and are never terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobState {
    Pending,
    Running,
    Success,
    Failed,
    Other(String),
}

impl JobState {
    /// Whether no further transition can follow this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Success | JobState::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobState::Pending => "pending",
            JobState::Running => "running",
            JobState::Success => "success",
            JobState::Failed => "failed",
            JobState::Other(raw) => raw,
        }
    }
}

impl From<&str> for JobState {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => JobState::Pending,
            "running" => JobState::Running,
            "success" => JobState::Success,
            "failed" | "failure" => JobState::Failed,
            _ => JobState::Other(raw.to_string()),
        }
    }
}

impl From<String> for JobState {
    fn from(raw: String) -> Self {
        JobState::from(raw.as_str())
    }
}

impl From<JobState> for String {
    fn from(state: JobState) -> Self {
        state.as_str().to_string()
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a research job as reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    pub job_id: String,
    pub state: JobState,
    /// Present only when the job succeeded
    pub result: Option<JobResultPayload>,
    /// Present only when the job failed
    pub error: Option<String>,
}

/// The `result` object of a successful research job
///
/// Fields map one-to-one onto [`Report`]; `report_id` becomes the report's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResultPayload {
    pub report_id: Uuid,
    pub player_name: String,
    pub summary: String,
    pub recent_stats: String,
    pub injury_status: String,
    pub fantasy_outlook: String,
    pub detailed_analysis: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub token_usage: TokenUsage,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl JobResultPayload {
    /// Builds the report this payload describes
    ///
    /// Missing timestamps default to `now` and `now` plus the report TTL.
    pub fn into_report(self, now: DateTime<Utc>) -> Report {
        let created_at = self.created_at.unwrap_or(now);
        let expires_at = self
            .expires_at
            .unwrap_or_else(|| created_at + Duration::hours(REPORT_TTL_HOURS));

        Report {
            id: self.report_id,
            player_name_normalized: normalize_player_name(&self.player_name),
            player_name: self.player_name,
            summary: self.summary,
            recent_stats: self.recent_stats,
            injury_status: self.injury_status,
            fantasy_outlook: self.fantasy_outlook,
            detailed_analysis: self.detailed_analysis,
            sources: self.sources,
            token_usage: self.token_usage,
            created_at,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> JobResultPayload {
        JobResultPayload {
            report_id: Uuid::parse_str("0b7d5d8e-4a1c-4a36-8f0e-3f1a2b9c7d10").unwrap(),
            player_name: "Obscure Prospect".to_string(),
            summary: "Raw tools".to_string(),
            recent_stats: "AA: .281/.355/.470".to_string(),
            injury_status: "Healthy".to_string(),
            fantasy_outlook: "Stash".to_string(),
            detailed_analysis: "Long swing, plus speed".to_string(),
            sources: vec![Source {
                title: "FanGraphs".to_string(),
                uri: "https://fangraphs.com".to_string(),
            }],
            token_usage: TokenUsage {
                prompt_tokens: 10,
                response_tokens: 20,
                total_tokens: 30,
                estimated_cost: "$0.000100".to_string(),
            },
            created_at: None,
            expires_at: None,
        }
    }

    #[test]
    fn test_job_state_parsing() {
        assert_eq!(JobState::from("pending"), JobState::Pending);
        assert_eq!(JobState::from("running"), JobState::Running);
        assert_eq!(JobState::from("success"), JobState::Success);
        assert_eq!(JobState::from("failed"), JobState::Failed);
        assert_eq!(JobState::from("failure"), JobState::Failed);
        assert_eq!(JobState::from("FAILURE"), JobState::Failed);
        assert_eq!(
            JobState::from("queued"),
            JobState::Other("queued".to_string())
        );
    }

    #[test]
    fn test_job_state_terminality() {
        assert!(JobState::Success.is_terminal());
        assert!(JobState::Failed.is_terminal());
        assert!(!JobState::Pending.is_terminal());
        assert!(!JobState::Running.is_terminal());
        assert!(!JobState::Other("retry".to_string()).is_terminal());
    }

    #[test]
    fn test_job_state_serde_uses_plain_strings() {
        let state: JobState = serde_json::from_str("\"failure\"").unwrap();
        assert_eq!(state, JobState::Failed);
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"failed\"");
    }

    #[test]
    fn test_payload_into_report_maps_fields() {
        let now = Utc::now();
        let payload = payload();
        let report = payload.clone().into_report(now);

        assert_eq!(report.id, payload.report_id);
        assert_eq!(report.player_name, "Obscure Prospect");
        assert_eq!(report.player_name_normalized, "obscure prospect");
        assert_eq!(report.summary, payload.summary);
        assert_eq!(report.recent_stats, payload.recent_stats);
        assert_eq!(report.injury_status, payload.injury_status);
        assert_eq!(report.fantasy_outlook, payload.fantasy_outlook);
        assert_eq!(report.detailed_analysis, payload.detailed_analysis);
        assert_eq!(report.sources, payload.sources);
        assert_eq!(report.token_usage, payload.token_usage);
        assert_eq!(report.created_at, now);
        assert_eq!(report.expires_at, now + Duration::hours(REPORT_TTL_HOURS));
    }

    #[test]
    fn test_payload_keeps_explicit_timestamps() {
        let created = "2025-06-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let expires = "2025-06-01T18:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let mut payload = payload();
        payload.created_at = Some(created);
        payload.expires_at = Some(expires);

        let report = payload.into_report(Utc::now());
        assert_eq!(report.created_at, created);
        assert_eq!(report.expires_at, expires);
    }

    #[test]
    fn test_normalized_name_ignores_surrounding_whitespace() {
        let mut payload = payload();
        payload.player_name = "  Juan Soto ".to_string();

        let report = payload.into_report(Utc::now());
        assert_eq!(report.player_name, "  Juan Soto ");
        assert_eq!(report.player_name_normalized, "juan soto");
    }
}
