//! Tic-tac-toe engine with a computer opponent.
//!
//! The crate answers three questions for a front end:
//!
//! - Is the game over, and who won? ([`evaluate`])
//! - Where would the computer play? ([`choose_computer_move`])
//! - What does the board look like after a move? ([`apply_move`])
//!
//! The computer comes in three strengths ([`Difficulty`]): a random mover,
//! a win-or-block mover and an unbeatable minimax search. [`Game`] wraps
//! the board with turn order, mode and history for interactive play.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictac_core::{Board, Difficulty, Mark, Outcome, Position, choose_computer_move, evaluate};
//!
//! let board: Board = "XX__O____".parse()?;
//! assert_eq!(evaluate(&board), Outcome::Ongoing);
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let reply = choose_computer_move(&board, Difficulty::Hard, Mark::O, &mut rng)?;
//! assert_eq!(reply, Position::TopRight);
//! # Ok::<(), tictac_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod difficulty;
mod dispatcher;
mod error;
mod game;
mod movers;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use difficulty::Difficulty;
pub use dispatcher::{apply_move, choose_computer_move, play_computer_move};
pub use error::GameError;
pub use game::{Game, GameMode};
pub use movers::{Easy, Medium, Minimax, MoveStrategy, find_completion};
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use types::{Board, Cell, Mark};
