//! Health command handler

use anyhow::{Context, Result};
use colored::*;

use crate::config::Config;

/// Check API health and print each dependency
pub async fn handle_health(config: &Config) -> Result<()> {
    let client = config.client()?;
    let health = client.health().await.context("Health check failed")?;

    let overall = if health.is_healthy() {
        health.status.green()
    } else {
        health.status.red()
    };
    println!("{} {} ({})", "API:".bold(), overall, health.version.dimmed());

    let mut checks: Vec<_> = health.checks.iter().collect();
    checks.sort_by(|a, b| a.0.cmp(b.0));
    for (name, check) in checks {
        let status = if check.is_healthy() {
            check.status.green()
        } else {
            check.status.red()
        };
        match check.latency_ms {
            Some(latency) => println!("  {:<10} {} {}", name, status, format!("{:.2}ms", latency).dimmed()),
            None => println!("  {:<10} {}", name, status),
        }
    }

    if !health.is_healthy() {
        anyhow::bail!("API reports status '{}'", health.status);
    }

    Ok(())
}
