//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobResultPayload, JobState, JobStatus};

/// Body of `GET /scouting/jobs/{job_id}`
///
/// The error text arrives as `error_message` from the jobs service and as
/// `error` from the API's own schema; `error_message` takes precedence.
/// `result` is an arbitrary object until the job succeeds, so it stays
/// untyped here and is only read as a report payload on `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusBody {
    #[serde(default)]
    pub job_id: String,
    #[serde(default = "unknown_status")]
    pub status: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn unknown_status() -> String {
    "unknown".to_string()
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

impl TryFrom<JobStatusBody> for JobStatus {
    type Error = serde_json::Error;

    fn try_from(body: JobStatusBody) -> Result<Self, Self::Error> {
        let state = JobState::from(body.status);
        let error = match state {
            JobState::Failed => non_empty(body.error_message).or(non_empty(body.error)),
            _ => None,
        };
        let result = match (&state, body.result) {
            (JobState::Success, Some(value)) if !value.is_null() => {
                Some(serde_json::from_value::<JobResultPayload>(value)?)
            }
            _ => None,
        };

        Ok(JobStatus {
            job_id: body.job_id,
            state,
            result,
            error,
        })
    }
}
