//! ttt - play tic-tac-toe against the computer in the terminal.

#![warn(missing_docs)]

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt::{Cli, ConsoleIo, Settings, session};
use ttt_core::MatchController;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from(Cli::parse());

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(?settings, "Starting ttt");

    let mut game = MatchController::new(settings.opponent(), settings.first_player());
    let mut console = ConsoleIo::new(io::stdin().lock(), io::stdout().lock(), settings.clear_screen());

    let summary = session::play(&mut game, &mut console)?;
    info!(
        matches = summary.matches_completed(),
        rounds = summary.rounds_played(),
        score = %summary.final_score(),
        "Session finished"
    );

    Ok(())
}
