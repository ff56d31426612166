//! Board positions and their stable labels.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use super::RulesError;

/// A square on the board.
///
/// Squares are addressed by row-major index 0-8 or by the label the
/// human types, `"1"` (top-left) through `"9"` (bottom-right).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (label 1)
    TopLeft,
    /// Top-center (label 2)
    TopCenter,
    /// Top-right (label 3)
    TopRight,
    /// Middle-left (label 4)
    MiddleLeft,
    /// Center (label 5)
    Center,
    /// Middle-right (label 6)
    MiddleRight,
    /// Bottom-left (label 7)
    BottomLeft,
    /// Bottom-center (label 8)
    BottomCenter,
    /// Bottom-right (label 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, RulesError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(RulesError::OutOfBounds(index))
    }

    /// The label shown on the board and typed by the human.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "1",
            Position::TopCenter => "2",
            Position::TopRight => "3",
            Position::MiddleLeft => "4",
            Position::Center => "5",
            Position::MiddleRight => "6",
            Position::BottomLeft => "7",
            Position::BottomCenter => "8",
            Position::BottomRight => "9",
        }
    }

    /// Parses a label (`"1"`-`"9"`, surrounding whitespace ignored).
    #[instrument]
    pub fn from_label(label: &str) -> Result<Self, RulesError> {
        let trimmed = label.trim();
        Self::iter()
            .find(|pos| pos.label() == trimmed)
            .ok_or_else(|| RulesError::UnknownLabel(trimmed.to_string()))
    }

    /// Row (0-2) of this square.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this square.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
