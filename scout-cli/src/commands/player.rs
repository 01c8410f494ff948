//! Player command handlers
//!
//! Registry search, and name resolution with team/position hints for names
//! that `scout research` reported as ambiguous.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use scout_client::ScoutingClient;
use scout_core::domain::player::{Candidate, PlayerResolution};
use scout_core::dto::player::{PlayerSearchQuery, ResolveContext, ResolveRequest};

use crate::config::Config;
use crate::output::{print_candidates, print_player};

/// Player subcommands
#[derive(Subcommand)]
pub enum PlayerCommands {
    /// Search the player registry by partial name
    Search {
        /// Search text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Resolve a name to one player, using hints to break ties
    Resolve {
        /// Player name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Team name or abbreviation (e.g. LAD)
        #[arg(long)]
        team: Option<String>,

        /// Position (e.g. C, SS, SP)
        #[arg(long)]
        position: Option<String>,

        /// MLB id, if known
        #[arg(long)]
        mlb_id: Option<i64>,
    },
}

/// Handle player commands
///
/// # Arguments
/// * `command` - The player command to execute
/// * `config` - The CLI configuration
pub async fn handle_player_command(command: PlayerCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        PlayerCommands::Search { query, limit } => {
            let query = PlayerSearchQuery::new(query.join(" ")).with_limit(limit);
            search_players(&client, &query).await
        }
        PlayerCommands::Resolve {
            name,
            team,
            position,
            mlb_id,
        } => {
            let request = resolve_request(&name, team, position, mlb_id);
            resolve_player(&client, &request).await
        }
    }
}

fn resolve_request(
    name: &[String],
    team: Option<String>,
    position: Option<String>,
    mlb_id: Option<i64>,
) -> ResolveRequest {
    ResolveRequest::new(
        name.join(" "),
        ResolveContext {
            team,
            position,
            mlb_id,
            fangraphs_id: None,
        },
    )
}

async fn search_players(client: &ScoutingClient, query: &PlayerSearchQuery) -> Result<()> {
    let results = client
        .search_players(query)
        .await
        .with_context(|| format!("Failed to search players for '{}'", query.q))?;

    if results.players.is_empty() {
        println!("{}", format!("No players match '{}'.", results.query).yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} player(s) match '{}':", results.total, results.query).bold()
    );
    for player in &results.players {
        print_player(player);
    }

    Ok(())
}

async fn resolve_player(client: &ScoutingClient, request: &ResolveRequest) -> Result<()> {
    let resolution = client
        .resolve_player(request)
        .await
        .with_context(|| format!("Failed to resolve '{}'", request.name))?;

    print_resolution(&request.name, &resolution);
    Ok(())
}

fn print_resolution(name: &str, resolution: &PlayerResolution) {
    if let Some(player) = resolution.resolved_player() {
        println!(
            "{} {}",
            "✓ Resolved".green(),
            format!(
                "({}, confidence {:.0}%)",
                resolution.method,
                resolution.confidence * 100.0
            )
            .dimmed()
        );
        print_player(player);
        if resolution.requires_confirmation {
            println!("{}", "  Confirm this is the intended player.".yellow());
        }
        return;
    }

    if resolution.candidates.is_empty() {
        println!("{}", format!("No player matches '{}'.", name).yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "'{}' still matches {} players; add --team or --position:",
            name,
            resolution.candidates.len()
        )
        .yellow()
    );
    let candidates: Vec<Candidate> = resolution
        .candidates
        .iter()
        .cloned()
        .map(Candidate::from)
        .collect();
    print_candidates(&candidates);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_request_joins_name_words() {
        let name = vec!["Will".to_string(), "Smith".to_string()];
        let request = resolve_request(&name, Some("LAD".to_string()), None, None);

        assert_eq!(request.name, "Will Smith");
        let context = request.context.unwrap();
        assert_eq!(context.team.as_deref(), Some("LAD"));
        assert!(context.position.is_none());
    }

    #[test]
    fn test_resolve_request_without_hints_has_no_context() {
        let name = vec!["Juan Soto".to_string()];
        let request = resolve_request(&name, None, Some(String::new()), None);
        assert!(request.context.is_none());
    }

    #[test]
    fn test_resolve_request_keeps_mlb_id() {
        let name = vec!["Will".to_string(), "Smith".to_string()];
        let request = resolve_request(&name, None, None, Some(669257));
        assert_eq!(request.context.unwrap().mlb_id, Some(669257));
    }
}
