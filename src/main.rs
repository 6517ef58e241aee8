//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use depth_chart::{
    cli::{Commands, DepthChartCli},
    commands::{
        handlers::{handle_add, handle_backups, handle_remove, handle_show},
        Backend,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = DepthChartCli::parse();

    let default_level = if app.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut backend = Backend::resolve(app.api_url, app.db, app.local)
        .context("failed to open depth chart backend")?;

    match app.command {
        Commands::Show { json } => handle_show(&backend, json)
            .await
            .context("Failed to fetch depth chart")?,

        Commands::Add { target, depth } => handle_add(&mut backend, &target, depth)
            .await
            .context("Failed to add player")?,

        Commands::Remove { target } => handle_remove(&mut backend, &target)
            .await
            .context("Error removing player")?,

        Commands::Backups { target, json } => handle_backups(&backend, &target, json)
            .await
            .context("Error fetching backups")?,
    }

    Ok(())
}
