//! Threat (and, with roles swapped, opportunity) detection.

use super::super::{Board, Mark};
use super::{WINNING_LINES, WinningLine};
use tracing::{instrument, trace};

/// First winning line, in [`WINNING_LINES`] order, that `opponent` can
/// complete next move: two squares held by `opponent`, none by `mark`.
///
/// Called as `find_threat(board, them, me)` the same query finds the
/// lines *I* can complete, which is how the opponent looks for a win.
/// Only the first qualifying line is reported.
#[instrument]
pub fn find_threat(board: &Board, mark: Mark, opponent: Mark) -> Option<WinningLine> {
    let line = WINNING_LINES
        .iter()
        .find(|line| board.count_marks(opponent, line) == 2 && board.count_marks(mark, line) == 0)
        .copied();
    trace!(?line, "Threat search finished");
    line
}
