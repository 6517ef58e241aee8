//! Handlers for the show/add/remove/backups commands.

use super::Backend;
use crate::{chart::DepthChart, cli::PlayerTarget, Result};

pub const EMPTY_CHART_MESSAGE: &str = "No players in depth chart. Add some players to get started!";
pub const PLAYER_NOT_FOUND_MESSAGE: &str = "Player not found";
pub const NO_BACKUPS_MESSAGE: &str = "No backups found or player not in depth chart";

/// Render each position with 1-based ranks.
pub fn render_chart(chart: &DepthChart) -> String {
    if chart.is_empty() {
        return EMPTY_CHART_MESSAGE.to_string();
    }

    let mut out = String::new();
    for (position, players) in chart.iter() {
        out.push_str(position);
        out.push('\n');
        for (idx, player) in players.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, player));
        }
    }
    out.trim_end().to_string()
}

pub fn removal_message(position: &str, removed: &[String]) -> String {
    match removed.first() {
        Some(player) => format!("{} removed from {}", player, position),
        None => PLAYER_NOT_FOUND_MESSAGE.to_string(),
    }
}

pub fn backups_message(backups: &[String]) -> String {
    if backups.is_empty() {
        NO_BACKUPS_MESSAGE.to_string()
    } else {
        backups.join("\n")
    }
}

pub async fn handle_show(backend: &Backend, as_json: bool) -> Result<()> {
    let chart = backend.chart().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&chart)?); // tarpaulin::skip
    } else {
        println!("{}", render_chart(&chart)); // tarpaulin::skip
    }
    Ok(())
}

pub async fn handle_add(
    backend: &mut Backend,
    target: &PlayerTarget,
    depth: Option<usize>,
) -> Result<()> {
    backend
        .add_player(&target.position, &target.player, depth)
        .await?;

    println!("{} added to {}", target.player, target.position); // tarpaulin::skip
    Ok(())
}

pub async fn handle_remove(backend: &mut Backend, target: &PlayerTarget) -> Result<()> {
    let removed = backend
        .remove_player(&target.position, &target.player)
        .await?;

    println!("{}", removal_message(&target.position, &removed)); // tarpaulin::skip
    Ok(())
}

pub async fn handle_backups(backend: &Backend, target: &PlayerTarget, as_json: bool) -> Result<()> {
    let backups = backend.backups(&target.position, &target.player).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&backups)?); // tarpaulin::skip
    } else {
        println!("{}", backups_message(&backups)); // tarpaulin::skip
    }
    Ok(())
}
