//! Report DTOs

use serde::{Deserialize, Serialize};

use crate::domain::report::Report;

/// Largest page the report listing endpoint serves
pub const MAX_REPORT_PAGE: u32 = 100;

/// Body of `GET /scouting/reports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportList {
    pub reports: Vec<Report>,
    pub total: u64,
}

/// Query parameters for `GET /scouting/reports`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportListQuery {
    pub limit: u32,
    pub offset: u32,
    pub include_expired: bool,
}

impl Default for ReportListQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            include_expired: false,
        }
    }
}

impl ReportListQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 || self.limit > MAX_REPORT_PAGE {
            return Err(format!("limit must be between 1 and {}", MAX_REPORT_PAGE));
        }
        Ok(())
    }
}
