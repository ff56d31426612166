//! Error types for rule and match violations.

use super::{Position, controller::MatchState};

/// Error raised when a caller breaks a rules or match contract.
///
/// The core assumes well-formed input; these errors exist so that a
/// broken contract fails loudly instead of corrupting the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// The square at the position is already occupied.
    #[display("Invalid move: square {} is already occupied", _0)]
    InvalidMove(Position),

    /// Index outside 0-8.
    #[display("Invalid move: index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// Label that names no square.
    #[display("Invalid move: {:?} is not a square label (must be 1-9)", _0)]
    UnknownLabel(String),

    /// The opponent was asked to move on a full board.
    #[display("No empty squares left to choose from")]
    NoEmptyCells,

    /// Both marks complete a line on the same board.
    #[display("Invariant violation: both players have three in a row")]
    BothWon,

    /// Operation not allowed in the current match state.
    #[display("Operation not allowed while {}", _0)]
    UnexpectedState(MatchState),
}

impl std::error::Error for RulesError {}
