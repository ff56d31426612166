//! Terminal collaborator: draws the board and prompts on a line-based stream.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor, queue,
    terminal::{self, ClearType},
};
use tracing::{debug, instrument};
use ttt_core::{Board, MatchScore, PlayerKind, Position, RoundOutcome, Square};

use crate::session::{MoveInput, Renderer};

const INVALID_ANSWER: &str = "Sorry, that's not a valid answer.";
const YES_NO: [&str; 4] = ["y", "n", "Y", "N"];

/// Console I/O over any reader/writer pair.
///
/// Production uses locked stdin/stdout; tests use in-memory buffers.
pub struct ConsoleIo<I, O> {
    input: I,
    output: O,
    clear_screen: bool,
}

impl<I: BufRead, O: Write> ConsoleIo<I, O> {
    /// Creates a console; `clear_screen` clears the terminal before each board.
    pub fn new(input: I, output: O, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Asks `message` until the answer is one of `valid`.
    #[instrument(skip(self, valid))]
    fn prompt(&mut self, message: &str, valid: &[&str]) -> Result<String> {
        loop {
            write!(self.output, "{message} ")?;
            self.output.flush().context("Failed to flush prompt")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read answer")?;
            if read == 0 {
                bail!("Input closed while waiting for an answer");
            }

            let answer = line.trim();
            if valid.contains(&answer) {
                return Ok(answer.to_string());
            }

            debug!(answer, "Rejected answer");
            writeln!(self.output, "{INVALID_ANSWER}")?;
            writeln!(self.output)?;
        }
    }

    /// Clears the terminal and homes the cursor, when enabled.
    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(
                self.output,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )
            .context("Failed to clear screen")?;
        }
        Ok(())
    }

    fn yes_no(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(question, &YES_NO)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}

impl<I: BufRead, O: Write> MoveInput for ConsoleIo<I, O> {
    fn human_move(&mut self, _board: &Board, choices: &[Position]) -> Result<Position> {
        let labels: Vec<&str> = choices.iter().map(|pos| pos.label()).collect();
        let message = format!("Choose a square ({}):", join_or(&labels, ", ", "or"));
        let answer = self.prompt(&message, &labels)?;
        Ok(Position::from_label(&answer)?)
    }

    fn play_again(&mut self) -> Result<bool> {
        self.yes_no("Would you like to play again?")
    }

    fn new_match(&mut self) -> Result<bool> {
        self.yes_no("Would you like to start a new match?")
    }
}

impl<I: BufRead, O: Write> Renderer for ConsoleIo<I, O> {
    fn welcome(&mut self) -> Result<()> {
        self.clear()?;
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn board(&mut self, board: &Board) -> Result<()> {
        self.clear()?;
        write!(self.output, "{}", render_board(board))?;
        self.output.flush().context("Failed to draw board")
    }

    fn round_result(&mut self, outcome: RoundOutcome, score: &MatchScore) -> Result<()> {
        let message = match outcome {
            RoundOutcome::HumanWin => "You won this round! Congratulations!",
            RoundOutcome::ComputerWin => "I won! I won! Take that, human!",
            RoundOutcome::Tie => "A tie game. How boring.",
        };
        writeln!(self.output, "{message}")?;
        writeln!(
            self.output,
            "Computer round wins: {}",
            score.get(PlayerKind::Computer)
        )?;
        writeln!(self.output, "Your round wins: {}", score.get(PlayerKind::Human))?;
        Ok(())
    }

    fn match_result(&mut self, winner: PlayerKind, score: &MatchScore) -> Result<()> {
        let who = match winner {
            PlayerKind::Human => "you",
            PlayerKind::Computer => "the computer",
        };
        writeln!(
            self.output,
            "Match over, {who} reached {} round wins. Final score: computer {}, you {}.",
            score.get(winner),
            score.get(PlayerKind::Computer),
            score.get(PlayerKind::Human)
        )?;
        Ok(())
    }

    fn goodbye(&mut self, winner: Option<PlayerKind>) -> Result<()> {
        match winner {
            Some(PlayerKind::Human) => {
                writeln!(self.output, "Congratulations, you have won the game!!!!")?
            }
            Some(PlayerKind::Computer) => writeln!(self.output, "The computer has won the game.")?,
            None => {}
        }
        writeln!(self.output, "Thanks for playing Tic Tac Toe! Goodbye!")?;
        self.output.flush().context("Failed to flush goodbye")
    }
}

/// Joins choices for a prompt: `1`, `1 or 2`, `1, 2, or 3`.
pub fn join_or(items: &[&str], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} {word} {second}"),
        [rest @ .., last] => format!("{}{delimiter}{word} {last}", rest.join(delimiter)),
    }
}

/// Draws the classic 3x3 grid, five characters per cell.
pub fn render_board(board: &Board) -> String {
    let symbol = |pos: Position| match board.get(pos) {
        Square::Empty => " ".to_string(),
        Square::Occupied(mark) => mark.to_string(),
    };

    let mut out = String::from("\n");
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        out.push_str("     |     |\n");
        out.push_str(&format!(
            "  {}  |  {}  |  {}\n",
            symbol(cells[0]),
            symbol(cells[1]),
            symbol(cells[2])
        ));
        out.push_str("     |     |\n");
        if row < 2 {
            out.push_str("-----+-----+-----\n");
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use ttt_core::Mark;

    #[test]
    fn test_join_or() {
        assert_eq!(join_or(&[], ", ", "or"), "");
        assert_eq!(join_or(&["5"], ", ", "or"), "5");
        assert_eq!(join_or(&["1", "9"], ", ", "or"), "1 or 9");
        assert_eq!(join_or(&["1", "4", "9"], ", ", "or"), "1, 4, or 9");
        assert_eq!(join_or(&["1", "2", "3"], "; ", "and"), "1; 2; and 3");
    }

    #[test]
    fn test_render_board() {
        let mut board = Board::new();
        board.mark(Position::TopLeft, Mark::X).expect("empty");
        board.mark(Position::Center, Mark::O).expect("empty");
        let lines: Vec<String> = render_board(&board).lines().map(String::from).collect();
        assert_eq!(lines[2], "  X  |     |   ");
        assert_eq!(lines[4], "-----+-----+-----");
        assert_eq!(lines[6], "     |  O  |   ");
        assert_eq!(lines.iter().filter(|l| l.starts_with("-----")).count(), 2);
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let input = Cursor::new("0\n5\n 3 \n");
        let mut console = ConsoleIo::new(input, Vec::new(), false);
        let mut board = Board::new();
        board.mark(Position::Center, Mark::O).expect("empty");
        let pos = console
            .human_move(&board, &board.empty_cells())
            .expect("valid eventually");
        assert_eq!(pos, Position::TopRight);

        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(output.matches(INVALID_ANSWER).count(), 2);
        assert!(output.contains("Choose a square (1, 2, 3, 4, 6, 7, 8, or 9):"));
    }

    #[test]
    fn test_yes_no_accepts_either_case() {
        let input = Cursor::new("yes\nY\nn\n");
        let mut console = ConsoleIo::new(input, Vec::new(), false);
        assert!(console.play_again().expect("answer"));
        assert!(!console.new_match().expect("answer"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut console = ConsoleIo::new(Cursor::new(""), Vec::new(), false);
        assert!(console.play_again().is_err());
    }

    #[test]
    fn test_clear_screen_only_when_enabled() {
        let mut plain = ConsoleIo::new(Cursor::new(""), Vec::new(), false);
        plain.board(&Board::new()).expect("draw");
        let output = String::from_utf8(plain.into_output()).expect("utf8");
        assert!(!output.contains('\x1B'));

        let mut cleared = ConsoleIo::new(Cursor::new(""), Vec::new(), true);
        cleared.board(&Board::new()).expect("draw");
        let output = String::from_utf8(cleared.into_output()).expect("utf8");
        // crossterm: Clear(All) then MoveTo(0, 0), before the board itself.
        assert!(output.starts_with("\x1B[2J\x1B[1;1H"));
        assert!(output.contains("-----+-----+-----"));
    }

    #[test]
    fn test_goodbye_names_match_winner() {
        let mut console = ConsoleIo::new(Cursor::new(""), Vec::new(), false);
        console.goodbye(Some(PlayerKind::Human)).expect("write");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(
            output,
            "Congratulations, you have won the game!!!!\nThanks for playing Tic Tac Toe! Goodbye!\n"
        );

        let mut console = ConsoleIo::new(Cursor::new(""), Vec::new(), false);
        console.goodbye(Some(PlayerKind::Computer)).expect("write");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert!(output.starts_with("The computer has won the game.\n"));
    }

    #[test]
    fn test_goodbye_without_winner() {
        let mut console = ConsoleIo::new(Cursor::new(""), Vec::new(), false);
        console.goodbye(None).expect("write");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(output, "Thanks for playing Tic Tac Toe! Goodbye!\n");
    }

    #[test]
    fn test_match_result_reports_final_score() {
        let mut score = MatchScore::new();
        for _ in 0..3 {
            score.record_win(PlayerKind::Computer);
        }
        score.record_win(PlayerKind::Human);
        let mut console = ConsoleIo::new(Cursor::new(""), Vec::new(), false);
        console
            .match_result(PlayerKind::Computer, &score)
            .expect("write");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert_eq!(
            output,
            "Match over, the computer reached 3 round wins. Final score: computer 3, you 1.\n"
        );
    }
}
