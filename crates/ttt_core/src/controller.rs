//! Round and match state machine.
//!
//! The controller owns the board, the score and the opponent. Callers
//! drive it one half-move at a time:
//!
//! ```text
//! AwaitingMove(player) --move--> AwaitingMove(other)
//!                      --move--> RoundOver(outcome) --next_round--> AwaitingMove(first)
//!                      --move--> MatchOver(winner)  --new_match-->  AwaitingMove(first)
//! ```

use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

use super::rules::{RoundOutcome, round_outcome};
use super::{Board, Decision, MatchScore, OpponentStrategy, PlayerKind, Position, RulesError};

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchState {
    /// Waiting for this side to mark a square.
    #[display("awaiting a move from {}", _0)]
    AwaitingMove(PlayerKind),
    /// A round finished without deciding the match.
    #[display("the round is over ({})", _0)]
    RoundOver(RoundOutcome),
    /// A side reached the winning score.
    #[display("the match is over ({} won)", _0)]
    MatchOver(PlayerKind),
}

/// Orchestrates turns, rounds and scoring for one human against the
/// heuristic opponent.
#[derive(Debug, Clone)]
pub struct MatchController<R = StdRng> {
    board: Board,
    score: MatchScore,
    first_player: PlayerKind,
    state: MatchState,
    last_outcome: Option<RoundOutcome>,
    rounds_played: u32,
    opponent: OpponentStrategy<R>,
}

impl<R: rand::Rng> MatchController<R> {
    /// Starts a match; `first_player` opens the first round.
    #[instrument(skip(opponent))]
    pub fn new(opponent: OpponentStrategy<R>, first_player: PlayerKind) -> Self {
        info!("Starting match");
        Self {
            board: Board::new(),
            score: MatchScore::new(),
            first_player,
            state: MatchState::AwaitingMove(first_player),
            last_outcome: None,
            rounds_played: 0,
            opponent,
        }
    }

    /// Board of the round in play (or the round just finished).
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    /// Current state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Side that opened (or will open) the current round.
    pub fn first_player(&self) -> PlayerKind {
        self.first_player
    }

    /// Side to move, if a move is awaited.
    pub fn current_player(&self) -> Option<PlayerKind> {
        match self.state {
            MatchState::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    /// Outcome of the most recently finished round.
    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Rounds finished in this match.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Applies the human's move.
    ///
    /// # Errors
    ///
    /// [`RulesError::UnexpectedState`] unless the human is to move,
    /// [`RulesError::InvalidMove`] if the square is taken.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, pos: Position) -> Result<MatchState, RulesError> {
        self.expect_turn(PlayerKind::Human)?;
        self.apply(PlayerKind::Human, pos)
    }

    /// Lets the opponent pick and play its move.
    ///
    /// # Errors
    ///
    /// [`RulesError::UnexpectedState`] unless the computer is to move.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<Decision, RulesError> {
        self.expect_turn(PlayerKind::Computer)?;
        let me = PlayerKind::Computer;
        let decision = self
            .opponent
            .decide(&self.board, me.mark(), me.opponent().mark())?;
        self.apply(me, decision.position())?;
        Ok(decision)
    }

    /// Starts the next round on a fresh board with the other side opening.
    ///
    /// # Errors
    ///
    /// [`RulesError::UnexpectedState`] unless a round just ended without
    /// deciding the match.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> Result<MatchState, RulesError> {
        if !matches!(self.state, MatchState::RoundOver(_)) {
            return Err(RulesError::UnexpectedState(self.state));
        }
        self.reset_board();
        Ok(self.state)
    }

    /// Starts a brand-new match at 0-0 with the other side opening.
    ///
    /// # Errors
    ///
    /// [`RulesError::UnexpectedState`] unless the match is over.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) -> Result<MatchState, RulesError> {
        if !matches!(self.state, MatchState::MatchOver(_)) {
            return Err(RulesError::UnexpectedState(self.state));
        }
        info!("Starting new match");
        self.score = MatchScore::new();
        self.rounds_played = 0;
        self.last_outcome = None;
        self.reset_board();
        Ok(self.state)
    }

    fn expect_turn(&self, player: PlayerKind) -> Result<(), RulesError> {
        match self.state {
            MatchState::AwaitingMove(current) if current == player => Ok(()),
            other => Err(RulesError::UnexpectedState(other)),
        }
    }

    fn apply(&mut self, player: PlayerKind, pos: Position) -> Result<MatchState, RulesError> {
        let mut next = self.board.clone();
        next.mark(pos, player.mark())?;
        let outcome = round_outcome(&next)?;
        self.board = next;
        debug!(%player, position = %pos, "Move applied");

        self.state = match outcome {
            None => MatchState::AwaitingMove(player.opponent()),
            Some(outcome) => {
                self.rounds_played += 1;
                self.last_outcome = Some(outcome);
                if let Some(winner) = outcome.winner() {
                    self.score.record_win(winner);
                }
                info!(%outcome, score = %self.score, "Round over");
                match self.score.match_winner() {
                    Some(winner) => MatchState::MatchOver(winner),
                    None => MatchState::RoundOver(outcome),
                }
            }
        };
        Ok(self.state)
    }

    fn reset_board(&mut self) {
        self.board = Board::new();
        self.first_player = self.first_player.opponent();
        self.state = MatchState::AwaitingMove(self.first_player);
        debug!(first = %self.first_player, "Board reset");
    }
}
