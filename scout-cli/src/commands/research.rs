//! Research command handler
//!
//! Submits a player for research and, when the API queues a job, polls it
//! until the report is ready.

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::*;
use scout_poller::{OutcomeSource, ResearchError, ResearchProgress, Researcher};
use tracing::info;

use crate::config::Config;
use crate::output::{print_candidates, print_progress, print_report};

/// Research a player and print the resulting report
pub async fn handle_research(player_name: &str, config: &Config) -> Result<()> {
    let client = Arc::new(config.client()?);
    let researcher = Researcher::new(client);

    let reporter = |progress: ResearchProgress| print_progress(&progress);

    match researcher.research_player(player_name, &reporter).await {
        Ok(outcome) => {
            match &outcome.source {
                OutcomeSource::Immediate(origin) => {
                    info!("Report {} served ({})", outcome.report.id, origin);
                }
                OutcomeSource::Job(job_id) => {
                    info!("Report {} produced by job {}", outcome.report.id, job_id);
                    println!("{}", "✓ Research complete".green());
                }
            }
            println!();
            print_report(&outcome.report);
            Ok(())
        }
        Err(ResearchError::Ambiguous {
            player_name,
            candidates,
        }) => {
            println!(
                "{}",
                format!("'{}' matches {} players:", player_name, candidates.len()).yellow()
            );
            print_candidates(&candidates);
            println!();
            println!(
                "Narrow it down with: {}",
                format!(
                    "scout player resolve \"{}\" --team <TEAM> --position <POS>",
                    player_name
                )
                .cyan()
            );
            anyhow::bail!("Ambiguous player name; resolve it, then research the full name")
        }
        Err(ResearchError::Transport(e)) if e.is_jobs_unavailable() => {
            Err(e).context("The research service is temporarily unavailable. Please try again.")
        }
        Err(e) => Err(e).with_context(|| format!("Research for '{}' failed", player_name)),
    }
}
