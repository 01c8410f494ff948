//! Player domain types
//!
//! A [`Candidate`] is the short form the research endpoint returns for an
//! ambiguous name. [`Player`] is the registry record returned by player
//! search and resolution.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight summary of a player that matched an ambiguous name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    #[serde(alias = "full_name")]
    pub display_name: String,
    #[serde(default, alias = "current_team_abbrev")]
    pub team_abbrev: Option<String>,
    #[serde(default, alias = "primary_position")]
    pub position: Option<String>,
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)?;
        match (&self.team_abbrev, &self.position) {
            (Some(team), Some(pos)) => write!(f, " ({}, {})", team, pos),
            (Some(team), None) => write!(f, " ({})", team),
            (None, Some(pos)) => write!(f, " ({})", pos),
            (None, None) => Ok(()),
        }
    }
}

/// A player from the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub full_name: String,
    #[serde(default)]
    pub mlb_id: Option<i64>,
    #[serde(default)]
    pub current_team: Option<String>,
    #[serde(default)]
    pub current_team_abbrev: Option<String>,
    #[serde(default)]
    pub primary_position: Option<String>,
    #[serde(default = "active_status")]
    pub status: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn active_status() -> String {
    "active".to_string()
}

fn default_true() -> bool {
    true
}

impl From<Player> for Candidate {
    fn from(player: Player) -> Self {
        Candidate {
            id: player.id,
            display_name: player.full_name,
            team_abbrev: player.current_team_abbrev,
            position: player.primary_position,
        }
    }
}

/// How the registry settled on a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    ExactMatch,
    ExternalId,
    ContextMatch,
    AliasMatch,
    Unresolved,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResolutionMethod::ExactMatch => "exact match",
            ResolutionMethod::ExternalId => "external id",
            ResolutionMethod::ContextMatch => "context match",
            ResolutionMethod::AliasMatch => "alias match",
            ResolutionMethod::Unresolved => "unresolved",
            ResolutionMethod::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// Result of resolving a name (plus optional context) to one player
///
/// When `resolved` is false, `candidates` holds the players the name still
/// matches; an empty list means nothing matched at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResolution {
    pub resolved: bool,
    #[serde(default)]
    pub player_id: Option<Uuid>,
    #[serde(default)]
    pub player: Option<Player>,
    pub confidence: f64,
    pub method: ResolutionMethod,
    #[serde(default)]
    pub candidates: Vec<Player>,
    #[serde(default)]
    pub requires_confirmation: bool,
}

impl PlayerResolution {
    /// The resolved player, if resolution settled on exactly one
    pub fn resolved_player(&self) -> Option<&Player> {
        if self.resolved { self.player.as_ref() } else { None }
    }
}
