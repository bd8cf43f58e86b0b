//! Line-oriented terminal front end.
//!
//! Reads cell choices from any `BufRead` and writes the board to any
//! `Write`, so tests can script a whole game.

use anyhow::{Context, Result};
use rand::RngCore;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictac_core::{Game, Outcome, Position};
use tracing::{debug, instrument, warn};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Cell(Position),
    /// Start over.
    Reset,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses a line; `None` if it is neither a command nor a cell.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Input::Quit),
            "r" | "reset" => Some(Input::Reset),
            other => Position::from_input(other).map(Input::Cell),
        }
    }
}

/// Status line shown under the board.
pub fn status_line(game: &Game) -> String {
    match game.outcome() {
        Outcome::Ongoing => format!("Player {}'s turn", game.to_move()),
        outcome => outcome.to_string(),
    }
}

/// Drives a game until the player quits or input ends.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    think_delay: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over the given streams.
    pub fn new(input: R, output: W, think_delay: Duration) -> Self {
        Self {
            input,
            output,
            think_delay,
        }
    }

    /// Plays until quit or end of input. Returns the final outcome.
    #[instrument(skip_all, fields(mode = ?game.mode()))]
    pub fn run(&mut self, game: &mut Game, rng: &mut impl RngCore) -> Result<Outcome> {
        self.show(game)?;

        loop {
            if game.needs_computer_move() {
                if !self.think_delay.is_zero() {
                    std::thread::sleep(self.think_delay);
                }
                let action = game.computer_move(rng).context("Computer failed to move")?;
                writeln!(self.output, "Computer plays {}", action.position)?;
                self.show(game)?;
                continue;
            }

            if game.is_active() {
                write!(
                    self.output,
                    "Player {}, choose a cell (1-9), r to reset, q to quit: ",
                    game.to_move()
                )?;
            } else {
                write!(self.output, "r to play again, q to quit: ")?;
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                break;
            };

            match Input::parse(&line) {
                Some(Input::Quit) => break,
                Some(Input::Reset) => {
                    game.reset();
                    self.show(game)?;
                }
                Some(Input::Cell(position)) => match game.play(position) {
                    Ok(_) => self.show(game)?,
                    Err(e) => {
                        warn!(error = %e, "Move refused");
                        writeln!(self.output, "{}", e)?;
                    }
                },
                None => writeln!(self.output, "Not a cell: {}", line.trim())?,
            }
        }

        Ok(game.outcome())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }

    fn show(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output, "\n{}\n", game.board())?;
        writeln!(self.output, "{}", status_line(game))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands_and_cells() {
        assert_eq!(Input::parse("q\n"), Some(Input::Quit));
        assert_eq!(Input::parse(" R "), Some(Input::Reset));
        assert_eq!(Input::parse("5"), Some(Input::Cell(Position::Center)));
        assert_eq!(Input::parse("top left"), Some(Input::Cell(Position::TopLeft)));
        assert_eq!(Input::parse("x"), None);
    }

    #[test]
    fn test_status_line() {
        let mut game = Game::default();
        assert_eq!(status_line(&game), "Player X's turn");
        game.play(Position::Center).unwrap();
        assert_eq!(status_line(&game), "Player O's turn");
    }
}
