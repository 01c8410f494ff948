//! Report command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use scout_client::ScoutingClient;
use scout_core::dto::report::ReportListQuery;

use crate::config::Config;
use crate::output::{print_report, print_report_summary};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the cached report for a player
    Get {
        /// Player name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Also show an expired report
        #[arg(long)]
        include_expired: bool,
    },
    /// List recent reports
    List {
        #[arg(long, default_value_t = 20)]
        limit: u32,

        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Include expired reports
        #[arg(long)]
        include_expired: bool,
    },
}

/// Handle report commands
///
/// # Arguments
/// * `command` - The report command to execute
/// * `config` - The CLI configuration
pub async fn handle_report_command(command: ReportCommands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        ReportCommands::Get {
            name,
            include_expired,
        } => get_report(&client, &name.join(" "), include_expired).await,
        ReportCommands::List {
            limit,
            offset,
            include_expired,
        } => {
            list_reports(
                &client,
                ReportListQuery {
                    limit,
                    offset,
                    include_expired,
                },
            )
            .await
        }
    }
}

async fn get_report(client: &ScoutingClient, name: &str, include_expired: bool) -> Result<()> {
    match client.get_report(name, include_expired).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            println!("{}", format!("No report found for '{}'.", name).yellow());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to fetch report for '{}'", name)),
    }
}

async fn list_reports(client: &ScoutingClient, query: ReportListQuery) -> Result<()> {
    let list = client
        .list_reports(query)
        .await
        .context("Failed to list reports")?;

    if list.reports.is_empty() {
        println!("{}", "No reports found.".yellow());
    } else {
        println!(
            "{}",
            format!("Showing {} of {} report(s):", list.reports.len(), list.total).bold()
        );
        println!();
        for report in &list.reports {
            print_report_summary(report);
        }
    }

    Ok(())
}
