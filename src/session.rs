//! Session loop: drives a [`MatchController`] against an I/O collaborator.

use anyhow::{Result, anyhow, bail};
use derive_getters::Getters;
use tracing::{debug, info, instrument};
use ttt_core::{Board, MatchController, MatchScore, MatchState, PlayerKind, Position, RoundOutcome};

/// Source of the human's decisions.
pub trait MoveInput {
    /// Gets the human's move.
    ///
    /// Must return one of `choices`; re-prompting on bad input is the
    /// implementor's job.
    fn human_move(&mut self, board: &Board, choices: &[Position]) -> Result<Position>;

    /// Asks whether to play another round of the current match.
    fn play_again(&mut self) -> Result<bool>;

    /// Asks whether to start a new match after one has been decided.
    fn new_match(&mut self) -> Result<bool>;
}

/// Sink for everything the player gets to see.
pub trait Renderer {
    /// Greets the player once per session.
    fn welcome(&mut self) -> Result<()>;

    /// Draws the board.
    fn board(&mut self, board: &Board) -> Result<()>;

    /// Reports how a round ended and the running score.
    fn round_result(&mut self, outcome: RoundOutcome, score: &MatchScore) -> Result<()>;

    /// Reports the final score of a decided match.
    fn match_result(&mut self, winner: PlayerKind, score: &MatchScore) -> Result<()>;

    /// Says goodbye, naming the match winner when the session ended on one.
    fn goodbye(&mut self, winner: Option<PlayerKind>) -> Result<()>;
}

/// What happened over a whole session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Matches played to a decision.
    #[getter(copy)]
    matches_completed: u32,
    /// Rounds finished across all matches.
    #[getter(copy)]
    rounds_played: u32,
    /// Score when the session ended.
    final_score: MatchScore,
    /// Winner of the match the session ended on, if it was decided.
    #[getter(copy)]
    match_winner: Option<PlayerKind>,
}

/// Plays rounds and matches until the player declines to continue.
#[instrument(skip_all)]
pub fn play<R, C>(game: &mut MatchController<R>, io: &mut C) -> Result<SessionSummary>
where
    R: rand::Rng,
    C: MoveInput + Renderer,
{
    io.welcome()?;

    let mut matches_completed = 0;
    let mut rounds_played = 0;

    let match_winner = loop {
        play_round(game, io)?;
        rounds_played += 1;

        let outcome = game
            .last_outcome()
            .ok_or_else(|| anyhow!("Round finished without an outcome"))?;
        io.round_result(outcome, game.score())?;

        match game.state() {
            MatchState::RoundOver(_) => {
                if !io.play_again()? {
                    info!(score = %game.score(), "Player left mid-match");
                    break None;
                }
                game.next_round()?;
            }
            MatchState::MatchOver(winner) => {
                matches_completed += 1;
                info!(%winner, score = %game.score(), "Match over");
                io.match_result(winner, game.score())?;
                if !io.new_match()? {
                    break Some(winner);
                }
                game.new_match()?;
            }
            state @ MatchState::AwaitingMove(_) => bail!("Round loop exited while {state}"),
        }
    };

    io.goodbye(match_winner)?;

    Ok(SessionSummary {
        matches_completed,
        rounds_played,
        final_score: *game.score(),
        match_winner,
    })
}

/// Plays half-moves until the round ends, redrawing after each one.
fn play_round<R, C>(game: &mut MatchController<R>, io: &mut C) -> Result<()>
where
    R: rand::Rng,
    C: MoveInput + Renderer,
{
    debug!(first = %game.first_player(), "Round starting");
    io.board(game.board())?;

    while let Some(player) = game.current_player() {
        match player {
            PlayerKind::Human => {
                let choices = game.board().empty_cells();
                let pos = io.human_move(game.board(), &choices)?;
                game.play_human(pos)?;
            }
            PlayerKind::Computer => {
                let decision = game.play_computer()?;
                debug!(position = %decision.position(), reason = %decision.reason(), "Computer moved");
            }
        }
        io.board(game.board())?;
    }

    Ok(())
}
