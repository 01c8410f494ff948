//! Terminal rendering shared by command handlers

use chrono::Utc;
use colored::*;
use scout_core::domain::player::{Candidate, Player};
use scout_core::domain::report::Report;
use scout_poller::ResearchProgress;

/// Print one progress update
pub fn print_progress(progress: &ResearchProgress) {
    match progress {
        ResearchProgress::Queued { job_id, .. } => {
            println!("{} {}", "⏳".yellow(), progress.message());
            println!("   Job: {}", job_id.dimmed());
        }
        ResearchProgress::Waiting { state, .. } => {
            println!(
                "   {} {}",
                progress.message().dimmed(),
                format!("[{}]", state).dimmed()
            );
        }
    }
}

/// Print ambiguous-match candidates
pub fn print_candidates(candidates: &[Candidate]) {
    for candidate in candidates {
        println!("  {} {}", "▸".cyan(), candidate);
        println!("    ID: {}", candidate.id.to_string().dimmed());
    }
}

/// Print one registry player
pub fn print_player(player: &Player) {
    let team = player
        .current_team
        .as_deref()
        .or(player.current_team_abbrev.as_deref())
        .unwrap_or("Free agent");
    let position = player.primary_position.as_deref().unwrap_or("-");

    println!("  {} {}", "▸".cyan(), player.full_name.bold());
    println!("    Team:     {}", team);
    println!("    Position: {}", position);
    if let Some(mlb_id) = player.mlb_id {
        println!("    MLB ID:   {}", mlb_id);
    }
    if !player.is_active {
        println!("    Status:   {}", player.status.red());
    }
    println!("    ID:       {}", player.id.to_string().dimmed());
}

/// Print a one-entry summary of a report
pub fn print_report_summary(report: &Report) {
    println!("  {} {}", "▸".cyan(), report.player_name.bold());
    println!("    Outlook: {}", report.fantasy_outlook);
    println!("    Injury:  {}", report.injury_status);
    println!(
        "    Created: {}{}",
        report
            .created_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed(),
        if report.is_expired(Utc::now()) {
            " (expired)".red().to_string()
        } else {
            String::new()
        }
    );
    println!();
}

/// Print a full report
pub fn print_report(report: &Report) {
    println!("{}", format!("Scouting Report: {}", report.player_name).bold());
    println!("  ID:      {}", report.id.to_string().dimmed());
    println!(
        "  Created: {}",
        report.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  Expires: {}",
        report.expires_at.format("%Y-%m-%d %H:%M:%S")
    );

    println!("\n{}", "Summary:".bold());
    println!("{}", report.summary);

    println!("\n{}", "Injury Status:".bold());
    println!("{}", report.injury_status);

    println!("\n{}", "Fantasy Outlook:".bold());
    println!("{}", report.fantasy_outlook.cyan());

    println!("\n{}", "Recent Stats:".bold());
    println!("{}", report.recent_stats);

    println!("\n{}", "Analysis:".bold());
    println!("{}", report.detailed_analysis);

    if !report.sources.is_empty() {
        println!("\n{}", "Sources:".bold());
        for source in &report.sources {
            println!("  {} {}", source.title, source.uri.dimmed());
        }
    }

    let usage = &report.token_usage;
    if usage.total_tokens > 0 {
        println!(
            "\n{}",
            format!(
                "Tokens: {} prompt / {} response / {} total ({})",
                usage.prompt_tokens, usage.response_tokens, usage.total_tokens, usage.estimated_cost
            )
            .dimmed()
        );
    }
}
