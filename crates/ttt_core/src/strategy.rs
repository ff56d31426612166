//! Heuristic computer opponent.
//!
//! The opponent is deliberately weak: it completes its own line when it
//! can, blocks the human's line when it must, otherwise takes the center
//! and falls back to a uniformly random empty square. There is no fork
//! detection and no corner preference.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::rules::{WinningLine, find_threat};
use super::{Board, Mark, Position, RulesError};

/// Rule of the heuristic that picked a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum MoveReason {
    /// Completes one of our own lines.
    #[strum(serialize = "win")]
    Win,
    /// Stops the opponent completing a line.
    #[strum(serialize = "block")]
    Block,
    /// Center was free.
    #[strum(serialize = "center")]
    Center,
    /// Nothing better; uniform pick over empty squares.
    #[strum(serialize = "random")]
    Random,
}

/// A chosen square and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Decision {
    /// Square to mark.
    #[getter(copy)]
    position: Position,
    /// Which rule fired.
    #[getter(copy)]
    reason: MoveReason,
}

/// Fixed-priority opponent: win now, block now, center, random.
///
/// The random source is injected so tests can seed it.
#[derive(Debug, Clone)]
pub struct OpponentStrategy<R = StdRng> {
    rng: R,
}

impl OpponentStrategy<StdRng> {
    /// Opponent seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Opponent with a reproducible random fallback.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> OpponentStrategy<R> {
    /// Creates an opponent drawing fallback moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the square to mark for `self_mark`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::NoEmptyCells`] if the board is full; the
    /// match controller never asks for a move once the round is over.
    pub fn choose_move(
        &mut self,
        board: &Board,
        self_mark: Mark,
        opponent_mark: Mark,
    ) -> Result<Position, RulesError> {
        self.decide(board, self_mark, opponent_mark)
            .map(|decision| decision.position())
    }

    /// Like [`choose_move`](Self::choose_move), also reporting which rule fired.
    #[instrument(skip(self, board))]
    pub fn decide(
        &mut self,
        board: &Board,
        self_mark: Mark,
        opponent_mark: Mark,
    ) -> Result<Decision, RulesError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(RulesError::NoEmptyCells);
        }

        let decision = if let Some(pos) = find_threat(board, opponent_mark, self_mark)
            .and_then(|line| first_empty(board, &line))
        {
            Decision { position: pos, reason: MoveReason::Win }
        } else if let Some(pos) = find_threat(board, self_mark, opponent_mark)
            .and_then(|line| first_empty(board, &line))
        {
            Decision { position: pos, reason: MoveReason::Block }
        } else if board.is_empty(Position::Center) {
            Decision { position: Position::Center, reason: MoveReason::Center }
        } else {
            let pos = *empty.choose(&mut self.rng).ok_or(RulesError::NoEmptyCells)?;
            Decision { position: pos, reason: MoveReason::Random }
        };

        debug!(position = %decision.position, reason = %decision.reason, "Opponent chose move");
        Ok(decision)
    }
}

/// First empty square of `line`, in the line's own order.
fn first_empty(board: &Board, line: &WinningLine) -> Option<Position> {
    line.iter().copied().find(|&pos| board.is_empty(pos))
}
