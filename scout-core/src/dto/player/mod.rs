//! Player registry DTOs

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;

/// Shortest name the resolver and search accept
pub const MIN_PLAYER_QUERY_LEN: usize = 2;

/// Longest name the resolver accepts
pub const MAX_RESOLVE_NAME_LEN: usize = 150;

/// Largest page the search endpoint serves
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Disambiguating hints sent with a resolve request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mlb_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fangraphs_id: Option<String>,
}

impl ResolveContext {
    pub fn is_empty(&self) -> bool {
        self.team.is_none()
            && self.position.is_none()
            && self.mlb_id.is_none()
            && self.fangraphs_id.is_none()
    }
}

/// Body of `POST /players/resolve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ResolveContext>,
}

impl ResolveRequest {
    /// Creates a request with the name trimmed and blank hints dropped
    ///
    /// An all-empty context is sent as no context at all.
    pub fn new(name: impl AsRef<str>, context: ResolveContext) -> Self {
        let hint = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let context = ResolveContext {
            team: hint(context.team),
            position: hint(context.position),
            mlb_id: context.mlb_id,
            fangraphs_id: hint(context.fangraphs_id),
        };

        Self {
            name: name.as_ref().trim().to_string(),
            context: (!context.is_empty()).then_some(context),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let len = self.name.chars().count();
        if !(MIN_PLAYER_QUERY_LEN..=MAX_RESOLVE_NAME_LEN).contains(&len) {
            return Err(format!(
                "player name must be between {} and {} characters",
                MIN_PLAYER_QUERY_LEN, MAX_RESOLVE_NAME_LEN
            ));
        }
        Ok(())
    }
}

/// Query parameters for `GET /players/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSearchQuery {
    pub q: String,
    pub limit: u32,
}

impl PlayerSearchQuery {
    pub fn new(q: impl AsRef<str>) -> Self {
        Self {
            q: q.as_ref().trim().to_string(),
            limit: 10,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.q.chars().count() < MIN_PLAYER_QUERY_LEN {
            return Err(format!(
                "search query must be at least {} characters",
                MIN_PLAYER_QUERY_LEN
            ));
        }
        if self.limit == 0 || self.limit > MAX_SEARCH_LIMIT {
            return Err(format!("limit must be between 1 and {}", MAX_SEARCH_LIMIT));
        }
        Ok(())
    }
}

/// Body of `GET /players/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSearchResults {
    pub players: Vec<Player>,
    pub query: String,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_request_drops_blank_context() {
        let request = ResolveRequest::new(
            " Will Smith ",
            ResolveContext {
                team: Some("  ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(request.name, "Will Smith");
        assert!(request.context.is_none());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Will Smith" }));
    }

    #[test]
    fn test_resolve_request_serializes_only_given_hints() {
        let request = ResolveRequest::new(
            "Will Smith",
            ResolveContext {
                team: Some("LAD".to_string()),
                position: Some(" C ".to_string()),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Will Smith",
                "context": { "team": "LAD", "position": "C" }
            })
        );
    }

    #[test]
    fn test_resolve_name_bounds() {
        let ctx = ResolveContext::default;
        assert!(ResolveRequest::new("W", ctx()).validate().is_err());
        assert!(ResolveRequest::new("Wi", ctx()).validate().is_ok());
        assert!(ResolveRequest::new("x".repeat(150), ctx()).validate().is_ok());
        assert!(ResolveRequest::new("x".repeat(151), ctx()).validate().is_err());
    }

    #[test]
    fn test_search_query_limits() {
        assert!(PlayerSearchQuery::new("Soto").validate().is_ok());
        assert!(PlayerSearchQuery::new(" S ").validate().is_err());
        assert!(PlayerSearchQuery::new("Soto").with_limit(0).validate().is_err());
        assert!(PlayerSearchQuery::new("Soto").with_limit(51).validate().is_err());
        assert!(PlayerSearchQuery::new("Soto").with_limit(50).validate().is_ok());
    }
}
