//! Scouting report domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long the backend keeps a generated report valid
pub const REPORT_TTL_HOURS: i64 = 24;

/// A finished scouting report for one player
///
/// Reports are immutable once the API returns them; callers only read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub player_name: String,
    pub player_name_normalized: String,
    /// Brief summary of recent performance
    pub summary: String,
    /// Markdown formatted recent stats
    pub recent_stats: String,
    /// Current injury status or "Healthy"
    pub injury_status: String,
    /// Buy/Sell/Hold recommendation
    pub fantasy_outlook: String,
    /// Comprehensive markdown analysis
    pub detailed_analysis: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub token_usage: TokenUsage,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Report {
    /// Whether the report is past its expiration time
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// A source the research was grounded on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

/// Token accounting for the research that produced a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub response_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
    /// Formatted cost string, e.g. "$0.008750"
    #[serde(default)]
    pub estimated_cost: String,
}

/// Normalizes a player name the way the backend keys its report cache
pub fn normalize_player_name(name: &str) -> String {
    name.trim().to_lowercase()
}
