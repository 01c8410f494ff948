//! Research DTOs

use serde::{Deserialize, Serialize};

use crate::domain::player::Candidate;
use crate::domain::report::Report;
use crate::domain::research::{ReportOrigin, ResearchResponse};

/// Body of `POST /scouting/research`, tagged by its `status` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResearchResponseBody {
    Cached {
        report: Report,
    },
    Generated {
        report: Report,
    },
    Pending {
        job_id: String,
        #[serde(default)]
        message: String,
    },
    Ambiguous {
        candidates: Vec<Candidate>,
    },
}

impl From<ResearchResponseBody> for ResearchResponse {
    fn from(body: ResearchResponseBody) -> Self {
        match body {
            ResearchResponseBody::Cached { report } => ResearchResponse::Complete {
                origin: ReportOrigin::Cached,
                report,
            },
            ResearchResponseBody::Generated { report } => ResearchResponse::Complete {
                origin: ReportOrigin::Generated,
                report,
            },
            ResearchResponseBody::Pending { job_id, message } => {
                ResearchResponse::Pending { job_id, message }
            }
            ResearchResponseBody::Ambiguous { candidates } => {
                ResearchResponse::Ambiguous { candidates }
            }
        }
    }
}
