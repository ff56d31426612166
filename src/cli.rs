//! Command-line interface for ttt.

use clap::Parser;

/// Tic Tac Toe - first to three rounds against the computer
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Play tic-tac-toe against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's random fallback moves (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer open the first round
    #[arg(long)]
    pub computer_first: bool,

    /// Do not clear the screen between moves
    #[arg(long)]
    pub no_clear: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
