//! Health check domain types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Overall health of the scouting API and its dependencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub checks: HashMap<String, HealthCheck>,
}

/// Result of a single dependency check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl HealthCheck {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_parsing() {
        let json = serde_json::json!({
            "status": "unhealthy",
            "version": "v1",
            "timestamp": "2025-06-01T12:00:00+00:00",
            "checks": {
                "database": { "status": "unhealthy" }
            }
        });

        let health: HealthStatus = serde_json::from_value(json).unwrap();
        assert!(!health.is_healthy());
        assert!(!health.checks["database"].is_healthy());
        assert_eq!(health.checks["database"].latency_ms, None);
    }
}
