//! Round-win tally for a match.

use serde::{Deserialize, Serialize};

use super::PlayerKind;

/// Round wins needed to take the match.
pub const ROUNDS_TO_WIN: u32 = 3;

/// Round wins per side, keyed by [`PlayerKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    human: u32,
    computer: u32,
}

impl MatchScore {
    /// A fresh 0-0 score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Round wins for `side`.
    pub fn get(&self, side: PlayerKind) -> u32 {
        match side {
            PlayerKind::Human => self.human,
            PlayerKind::Computer => self.computer,
        }
    }

    /// Credits `side` with one round win.
    pub fn record_win(&mut self, side: PlayerKind) {
        match side {
            PlayerKind::Human => self.human += 1,
            PlayerKind::Computer => self.computer += 1,
        }
    }

    /// Side that has reached [`ROUNDS_TO_WIN`], if any.
    pub fn match_winner(&self) -> Option<PlayerKind> {
        if self.human >= ROUNDS_TO_WIN {
            Some(PlayerKind::Human)
        } else if self.computer >= ROUNDS_TO_WIN {
            Some(PlayerKind::Computer)
        } else {
            None
        }
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "human {} - computer {}", self.human, self.computer)
    }
}
