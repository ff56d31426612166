//! Tic-tac-toe rules, heuristic opponent and match scoring.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: the constant [`WINNING_LINES`], win and threat detection
//! - **Opponent**: [`OpponentStrategy`], win-now > block-now > center > random
//! - **Controller**: [`MatchController`], turn order and first-to-three scoring
//!
//! The crate performs no I/O. Human moves come in through
//! [`MatchController::play_human`]; everything needed for rendering is
//! exposed through read-only accessors.
//!
//! # Example
//!
//! ```
//! use ttt_core::{MatchController, OpponentStrategy, PlayerKind, Position};
//!
//! let mut game = MatchController::new(OpponentStrategy::seeded(1), PlayerKind::Human);
//! game.play_human(Position::TopLeft)?;
//! let reply = game.play_computer()?;
//! assert_eq!(reply.position(), Position::Center);
//! # Ok::<(), ttt_core::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod position;
pub mod rules;
mod score;
mod strategy;
mod types;

pub use controller::{MatchController, MatchState};
pub use error::RulesError;
pub use position::Position;
pub use rules::{RoundOutcome, WINNING_LINES, WinningLine, find_threat, has_won, round_outcome, round_over};
pub use score::{MatchScore, ROUNDS_TO_WIN};
pub use strategy::{Decision, MoveReason, OpponentStrategy};
pub use types::{Board, Mark, PlayerKind, Square};
