//! Computer-vs-computer matches.

use rand::RngCore;
use serde::Serialize;
use tictac_core::{Board, Difficulty, GameError, Mark, Outcome, evaluate, play_computer_move};
use tracing::{debug, info, instrument};

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub ties: u32,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWon => self.x_wins += 1,
            Outcome::OWon => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Ongoing => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} ties",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.ties
        )
    }
}

/// Plays one game between two computer players. Returns the final outcome.
pub fn play_out(
    x: Difficulty,
    o: Difficulty,
    rng: &mut impl RngCore,
) -> Result<Outcome, GameError> {
    let mut board = Board::new();
    loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            debug!(cells = %board.compact(), %outcome, "Game finished");
            return Ok(outcome);
        }
        let mark = board.to_move();
        let difficulty = match mark {
            Mark::X => x,
            Mark::O => o,
        };
        play_computer_move(&mut board, difficulty, mark, rng)?;
    }
}

/// Plays `games` games of `x` against `o`.
#[instrument(skip(rng))]
pub fn run_tournament(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    rng: &mut impl RngCore,
) -> Result<Tally, GameError> {
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(play_out(x, o, rng)?);
    }
    info!(%tally, "Tournament finished");
    Ok(tally)
}
