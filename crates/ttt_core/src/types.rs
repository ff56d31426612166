//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::{Position, RulesError, WinningLine};

/// Symbol placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Cross, always the human's mark.
    X,
    /// Nought, always the computer's mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Which side of the match a player is on.
///
/// Each side carries a fixed mark for the whole match; only turn
/// order alternates between rounds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum PlayerKind {
    /// The person at the keyboard.
    Human,
    /// The heuristic opponent.
    Computer,
}

impl PlayerKind {
    /// Mark this side plays with.
    pub const fn mark(self) -> Mark {
        match self {
            PlayerKind::Human => Mark::X,
            PlayerKind::Computer => Mark::O,
        }
    }

    /// Returns the opposing side.
    pub const fn opponent(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidMove`] if the square is already
    /// occupied; the board is left untouched.
    #[instrument(skip(self))]
    pub fn mark(&mut self, pos: Position, mark: Mark) -> Result<(), RulesError> {
        if !self.is_empty(pos) {
            warn!("Rejected mark on occupied square");
            return Err(RulesError::InvalidMove(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Empty squares in index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// True when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Number of squares in `line` holding `mark`.
    pub fn count_marks(&self, mark: Mark, line: &WinningLine) -> usize {
        line.iter()
            .filter(|&&pos| self.get(pos) == Square::Occupied(mark))
            .count()
    }

    /// Number of empty squares in `line`.
    pub fn count_empty(&self, line: &WinningLine) -> usize {
        line.iter().filter(|&&pos| self.is_empty(pos)).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
