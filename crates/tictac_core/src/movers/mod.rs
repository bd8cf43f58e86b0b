//! Computer move selection.
//!
//! Each difficulty level is a [`MoveStrategy`]. Strategies are stateless
//! and receive the board by reference and randomness by injection, so the
//! same call with the same seeded generator always picks the same cell.

mod easy;
mod medium;
mod minimax;

pub use easy::Easy;
pub use medium::{Medium, find_completion};
pub use minimax::Minimax;

use crate::error::GameError;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::RngCore;

/// A policy for choosing the computer's next cell.
pub trait MoveStrategy {
    /// Picks an empty cell for `mark` to play.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board has no empty cell.
    fn choose(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut dyn RngCore,
    ) -> Result<Position, GameError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
