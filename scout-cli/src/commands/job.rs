//! Job command handlers
//!
//! Handles research-job commands: a single status snapshot, or waiting on
//! an existing job until it finishes.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use scout_client::ScoutingClient;
use scout_core::domain::job::{JobState, JobStatus};
use scout_poller::{JobPoller, ResearchProgress};

use crate::config::Config;
use crate::output::{print_progress, print_report};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Show the current status of a job
    Status {
        /// Job ID returned by `scout research`
        id: String,
    },
    /// Wait for a job to finish and print its report
    Wait {
        /// Job ID returned by `scout research`
        id: String,

        /// Label shown in progress messages
        #[arg(long, default_value = "player")]
        subject: String,
    },
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The job command to execute
/// * `config` - The CLI configuration
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        JobCommands::Status { id } => get_job_status(&client, &id).await,
        JobCommands::Wait { id, subject } => wait_for_job(client, &id, &subject).await,
    }
}

/// Get and display one status snapshot
async fn get_job_status(client: &ScoutingClient, id: &str) -> Result<()> {
    let status = client
        .get_job_status(id)
        .await
        .with_context(|| format!("Failed to fetch status of job {}", id))?;

    print_job_status(&status);

    Ok(())
}

/// Poll a job until it reaches a terminal state
async fn wait_for_job(client: ScoutingClient, id: &str, subject: &str) -> Result<()> {
    let poller = JobPoller::new(Arc::new(client));
    let reporter = |progress: ResearchProgress| print_progress(&progress);

    let report = poller
        .poll(id, subject, &reporter)
        .await
        .with_context(|| format!("Job {} did not produce a report", id))?;

    println!("{}", "✓ Research complete".green());
    println!();
    print_report(&report);

    Ok(())
}

/// Print a job status snapshot
fn print_job_status(status: &JobStatus) {
    println!("{}", "Job Status:".bold());
    println!("  ID:     {}", status.job_id.cyan());
    println!("  Status: {}", colorize_state(&status.state));

    if let Some(result) = &status.result {
        println!("  Report: {}", result.report_id.to_string().dimmed());
        println!("  Player: {}", result.player_name);
    }

    if let Some(error) = &status.error {
        println!("\n{}", "Error:".bold());
        println!("{}", error.red());
    }
}

/// Colorize job state for display
fn colorize_state(state: &JobState) -> colored::ColoredString {
    let text = state.as_str().to_string();
    match state {
        JobState::Pending => text.yellow(),
        JobState::Running => text.cyan(),
        JobState::Success => text.green(),
        JobState::Failed => text.red(),
        JobState::Other(_) => text.dimmed(),
    }
}
