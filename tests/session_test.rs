//! End-to-end sessions through the collaborator traits and the console.

use std::collections::VecDeque;
use std::io::Cursor;

use anyhow::{Result, anyhow};
use rand::rngs::mock::StepRng;
use ttt::{ConsoleIo, MoveInput, Renderer, session};
use ttt_core::{
    Board, MatchController, MatchScore, OpponentStrategy, PlayerKind, Position, RoundOutcome,
};

/// Controller whose opponent's random fallback takes the first empty square.
fn game(first: PlayerKind) -> MatchController<StepRng> {
    MatchController::new(OpponentStrategy::new(StepRng::new(0, 0)), first)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Welcome,
    Board,
    Round(RoundOutcome, u32, u32),
    Match(PlayerKind),
    Goodbye(Option<PlayerKind>),
}

/// Collaborator fed from fixed scripts that records what it was shown.
#[derive(Default)]
struct ScriptedIo {
    moves: VecDeque<&'static str>,
    answers: VecDeque<bool>,
    events: Vec<Event>,
}

impl ScriptedIo {
    fn new(moves: &[&'static str], answers: &[bool]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
            events: Vec::new(),
        }
    }

    fn rounds(&self) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Round(..) | Event::Match(_)))
            .cloned()
            .collect()
    }
}

impl MoveInput for ScriptedIo {
    fn human_move(&mut self, _board: &Board, choices: &[Position]) -> Result<Position> {
        let label = self.moves.pop_front().ok_or_else(|| anyhow!("out of moves"))?;
        let pos = Position::from_label(label)?;
        assert!(choices.contains(&pos), "scripted move {label} is not legal");
        Ok(pos)
    }

    fn play_again(&mut self) -> Result<bool> {
        self.answers.pop_front().ok_or_else(|| anyhow!("out of answers"))
    }

    fn new_match(&mut self) -> Result<bool> {
        self.answers.pop_front().ok_or_else(|| anyhow!("out of answers"))
    }
}

impl Renderer for ScriptedIo {
    fn welcome(&mut self) -> Result<()> {
        self.events.push(Event::Welcome);
        Ok(())
    }

    fn board(&mut self, _board: &Board) -> Result<()> {
        self.events.push(Event::Board);
        Ok(())
    }

    fn round_result(&mut self, outcome: RoundOutcome, score: &MatchScore) -> Result<()> {
        self.events.push(Event::Round(
            outcome,
            score.get(PlayerKind::Human),
            score.get(PlayerKind::Computer),
        ));
        Ok(())
    }

    fn match_result(&mut self, winner: PlayerKind, _score: &MatchScore) -> Result<()> {
        self.events.push(Event::Match(winner));
        Ok(())
    }

    fn goodbye(&mut self, winner: Option<PlayerKind>) -> Result<()> {
        self.events.push(Event::Goodbye(winner));
        Ok(())
    }
}

#[test]
fn test_quit_after_first_round() {
    let mut game = game(PlayerKind::Human);
    let mut io = ScriptedIo::new(&["1", "9", "3"], &[false]);

    let summary = session::play(&mut game, &mut io).expect("session runs");

    assert_eq!(summary.matches_completed(), 0);
    assert_eq!(summary.rounds_played(), 1);
    assert_eq!(summary.match_winner(), None);
    assert_eq!(summary.final_score().get(PlayerKind::Computer), 1);
    assert_eq!(io.events.first(), Some(&Event::Welcome));
    assert_eq!(io.events.last(), Some(&Event::Goodbye(None)));
    // Initial board plus one redraw per half-move.
    assert_eq!(io.events.iter().filter(|e| **e == Event::Board).count(), 7);
}

#[test]
fn test_full_match_then_new_match() {
    let mut game = game(PlayerKind::Human);
    let moves = [
        "1", "9", "3", // round 1, human opens: computer wins
        "1", "8", "7", "4", // round 2, computer opens: human wins
        "1", "2", "7", "6", "9", // round 3: tie
        "1", "3", // round 4, computer opens: computer wins
        "1", "9", "3", // round 5: computer wins the match
        "1", "3", // new match, computer opens: computer wins
    ];
    let answers = [true, true, true, true, true, false];
    let mut io = ScriptedIo::new(&moves, &answers);

    let summary = session::play(&mut game, &mut io).expect("session runs");

    assert_eq!(
        io.rounds(),
        vec![
            Event::Round(RoundOutcome::ComputerWin, 0, 1),
            Event::Round(RoundOutcome::HumanWin, 1, 1),
            Event::Round(RoundOutcome::Tie, 1, 1),
            Event::Round(RoundOutcome::ComputerWin, 1, 2),
            Event::Round(RoundOutcome::ComputerWin, 1, 3),
            Event::Match(PlayerKind::Computer),
            Event::Round(RoundOutcome::ComputerWin, 0, 1),
        ]
    );
    assert_eq!(io.events.iter().filter(|e| **e == Event::Welcome).count(), 1);
    assert_eq!(summary.matches_completed(), 1);
    assert_eq!(summary.rounds_played(), 6);
    assert_eq!(summary.match_winner(), None);
    assert!(io.moves.is_empty());
    assert!(io.answers.is_empty());
}

#[test]
fn test_session_ends_on_match_winner() {
    let mut game = game(PlayerKind::Computer);
    let moves = [
        "1", "8", "7", "4", // human wins
        "1", "2", "7", "6", "9", // tie
        "1", "8", "7", "4", // human wins
        "1", "9", "3", // computer wins
        "1", "8", "7", "4", // human wins the match
    ];
    let mut io = ScriptedIo::new(&moves, &[true, true, true, true, false]);
    let summary = session::play(&mut game, &mut io).expect("session runs");

    assert_eq!(summary.match_winner(), Some(PlayerKind::Human));
    assert_eq!(summary.final_score().get(PlayerKind::Human), 3);
    assert_eq!(summary.final_score().get(PlayerKind::Computer), 1);
    assert_eq!(io.events.last(), Some(&Event::Goodbye(Some(PlayerKind::Human))));
}

#[test]
fn test_console_match() {
    let input = [
        "1", "5", "9", "3", "y", // round 1 with a rejected occupied square
        "1", "3", "maybe", "Y", // round 2, computer opens
        "1", "9", "3", "n", // round 3 decides the match
    ]
    .join("\n")
        + "\n";
    let mut game = game(PlayerKind::Human);
    let mut console = ConsoleIo::new(Cursor::new(input), Vec::new(), false);

    let summary = session::play(&mut game, &mut console).expect("session runs");
    let output = String::from_utf8(console.into_output()).expect("utf8");

    assert_eq!(summary.match_winner(), Some(PlayerKind::Computer));
    assert_eq!(output.matches("Welcome to Tic Tac Toe!").count(), 1);
    assert_eq!(output.matches("I won! I won! Take that, human!").count(), 3);
    assert_eq!(output.matches("Sorry, that's not a valid answer.").count(), 2);
    assert!(output.contains("Choose a square (1, 2, 3, 4, 5, 6, 7, 8, or 9):"));
    assert!(output.contains("Computer round wins: 3"));
    assert!(output.contains("Your round wins: 0"));
    assert!(output.contains("Final score: computer 3, you 0."));
    assert!(output.contains("The computer has won the game.\nThanks for playing"));
    assert!(output.trim_end().ends_with("Thanks for playing Tic Tac Toe! Goodbye!"));
}

#[test]
fn test_console_input_closed() {
    let mut game = game(PlayerKind::Human);
    let mut console = ConsoleIo::new(Cursor::new("1\n"), Vec::new(), false);
    let err = session::play(&mut game, &mut console).expect_err("input runs out");
    assert!(err.to_string().contains("Input closed"));
}
