//! Win detection.

use super::super::{Board, Mark};
use super::WINNING_LINES;
use tracing::instrument;

/// Checks whether `mark` holds all three squares of some winning line.
#[instrument]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| board.count_marks(mark, line) == 3)
}
