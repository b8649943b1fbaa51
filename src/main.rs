//! Quantum Tic-Tac-Toe - terminal client
//!
//! Two players share one terminal; click a cell (or use the arrow keys
//! and Enter) to place a tentative mark.

#![warn(missing_docs)]

mod cli;
mod tui;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use quantum_tictactoe::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let config = cli.apply(GameConfig::load_or_default(&cli.config)?);
    info!(?config, "Configuration resolved");

    tui::run_tui(config.session(), config.round_pause())
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
