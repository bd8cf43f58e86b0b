//! A game session: board, mode, turn order and history.
//!
//! Front ends own a `Game` and drive it with [`Game::play`] for human
//! input and [`Game::computer_move`] when [`Game::needs_computer_move`]
//! says the computer is up. Everything is synchronous; any "thinking"
//! pause before the computer moves is the front end's business.

use crate::action::Move;
use crate::difficulty::Difficulty;
use crate::dispatcher::play_computer_move;
use crate::error::GameError;
use crate::outcome::{Outcome, evaluate};
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans take turns.
    #[default]
    HumanVsHuman,
    /// One human against the computer.
    HumanVsComputer {
        /// Computer strength.
        difficulty: Difficulty,
        /// The mark the computer plays.
        computer_mark: Mark,
    },
}

impl GameMode {
    /// The computer's mark, if the computer plays.
    pub fn computer_mark(&self) -> Option<Mark> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer_mark, .. } => Some(*computer_mark),
        }
    }
}

/// A game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    mode: GameMode,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.board.to_move()
    }

    /// Current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// True until someone wins or the board fills.
    pub fn is_active(&self) -> bool {
        !self.outcome().is_terminal()
    }

    /// True when the computer plays and it is its turn.
    pub fn needs_computer_move(&self) -> bool {
        self.is_active() && self.mode.computer_mark() == Some(self.to_move())
    }

    /// Places the mark of the side to move at `position`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has an outcome.
    /// - [`GameError::WrongTurn`] when the computer is to move.
    /// - [`GameError::CellOccupied`] for a taken cell.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn play(&mut self, position: Position) -> Result<Outcome, GameError> {
        if !self.is_active() {
            return Err(GameError::GameOver);
        }
        if self.needs_computer_move() {
            return Err(GameError::WrongTurn(self.to_move()));
        }

        let mark = self.to_move();
        self.board.apply_move(position, mark)?;
        self.history.push(Move::new(mark, position));
        debug!(%mark, %position, "Human moved");
        Ok(self.outcome())
    }

    /// Lets the computer take its turn.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoComputerOpponent`] in a human-only game.
    /// - [`GameError::GameOver`] once the game has an outcome.
    /// - [`GameError::WrongTurn`] when a human is to move.
    #[instrument(skip(self, rng))]
    pub fn computer_move(&mut self, rng: &mut impl RngCore) -> Result<Move, GameError> {
        let GameMode::HumanVsComputer {
            difficulty,
            computer_mark,
        } = self.mode
        else {
            return Err(GameError::NoComputerOpponent);
        };
        if !self.is_active() {
            return Err(GameError::GameOver);
        }

        let position = play_computer_move(&mut self.board, difficulty, computer_mark, rng)?;
        let action = Move::new(computer_mark, position);
        self.history.push(action);
        Ok(action)
    }

    /// Clears the board and history. X moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board.clear();
        self.history.clear();
    }

    /// Switches mode.
    ///
    /// Changing who plays restarts the game. Changing only the difficulty
    /// keeps the current position.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        let same_players = self.mode.computer_mark() == mode.computer_mark();
        self.mode = mode;
        if !same_players {
            self.reset();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
