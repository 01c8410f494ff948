//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod health;
mod job;
mod player;
mod report;
mod research;

pub use job::JobCommands;
pub use player::PlayerCommands;
pub use report::ReportCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Research a player, waiting for the report if a job is queued
    Research {
        /// Player name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Research job inspection
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Player registry search and name resolution
    Player {
        #[command(subcommand)]
        command: PlayerCommands,
    },
    /// Scouting report lookup
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Check API health
    Health,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Research { name } => research::handle_research(&name.join(" "), config).await,
        Commands::Job { command } => job::handle_job_command(command, config).await,
        Commands::Player { command } => player::handle_player_command(command, config).await,
        Commands::Report { command } => report::handle_report_command(command, config).await,
        Commands::Health => health::handle_health(config).await,
    }
}
