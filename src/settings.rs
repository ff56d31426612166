//! Resolved runtime settings.

use derive_getters::Getters;
use ttt_core::{OpponentStrategy, PlayerKind};

use crate::cli::Cli;

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Settings {
    /// Seed for the opponent's random fallback.
    #[getter(copy)]
    seed: Option<u64>,
    /// Side that opens the first round.
    #[getter(copy)]
    first_player: PlayerKind,
    /// Clear the terminal before each board.
    #[getter(copy)]
    clear_screen: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Settings {
    /// Opponent seeded as configured, or from entropy.
    pub fn opponent(&self) -> OpponentStrategy {
        match self.seed {
            Some(seed) => OpponentStrategy::seeded(seed),
            None => OpponentStrategy::from_entropy(),
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            seed: cli.seed,
            first_player: if cli.computer_first {
                PlayerKind::Computer
            } else {
                PlayerKind::Human
            },
            clear_screen: !cli.no_clear,
            log_filter: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let settings = Settings::from(Cli::parse_from(["ttt"]));
        assert_eq!(settings.seed(), None);
        assert_eq!(settings.first_player(), PlayerKind::Human);
        assert!(settings.clear_screen());
        assert_eq!(settings.log_filter(), "warn");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "ttt",
            "--seed",
            "42",
            "--computer-first",
            "--no-clear",
            "--log-level",
            "debug",
        ]);
        let settings = Settings::from(cli);
        assert_eq!(settings.seed(), Some(42));
        assert_eq!(settings.first_player(), PlayerKind::Computer);
        assert!(!settings.clear_screen());
        assert_eq!(settings.log_filter(), "debug");
    }
}
