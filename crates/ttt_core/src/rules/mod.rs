//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: the constant winning lines, win and
//! threat detection, and round termination. Rules are kept apart from
//! board storage so the opponent and the match controller share them.

pub mod threat;
pub mod win;

pub use threat::find_threat;
pub use win::has_won;

use super::{Board, PlayerKind, Position, RulesError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three squares that win when held by one mark.
pub type WinningLine = [Position; 3];

/// Every winning line.
///
/// Searches walk this list in order and stop at the first match, so the
/// order is the tie-break when several lines qualify.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// How a finished round ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum RoundOutcome {
    /// The human completed a line.
    #[strum(serialize = "human win")]
    HumanWin,
    /// The computer completed a line.
    #[strum(serialize = "computer win")]
    ComputerWin,
    /// Board filled with no line completed.
    #[strum(serialize = "tie")]
    Tie,
}

impl RoundOutcome {
    /// Side that won the round, if any.
    pub fn winner(self) -> Option<PlayerKind> {
        match self {
            RoundOutcome::HumanWin => Some(PlayerKind::Human),
            RoundOutcome::ComputerWin => Some(PlayerKind::Computer),
            RoundOutcome::Tie => None,
        }
    }
}

/// True once the board is full or either side has three in a row.
#[instrument]
pub fn round_over(board: &Board) -> bool {
    board.is_full()
        || has_won(board, PlayerKind::Human.mark())
        || has_won(board, PlayerKind::Computer.mark())
}

/// Outcome of the round on `board`, or `None` while it is still in play.
///
/// # Errors
///
/// Returns [`RulesError::BothWon`] if both marks hold a complete line,
/// which no legal sequence of moves can produce.
#[instrument]
pub fn round_outcome(board: &Board) -> Result<Option<RoundOutcome>, RulesError> {
    let human = has_won(board, PlayerKind::Human.mark());
    let computer = has_won(board, PlayerKind::Computer.mark());
    match (human, computer) {
        (true, true) => Err(RulesError::BothWon),
        (true, false) => Ok(Some(RoundOutcome::HumanWin)),
        (false, true) => Ok(Some(RoundOutcome::ComputerWin)),
        (false, false) if board.is_full() => Ok(Some(RoundOutcome::Tie)),
        (false, false) => Ok(None),
    }
}
