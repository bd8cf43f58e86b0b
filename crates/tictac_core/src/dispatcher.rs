//! Routes a computer turn to the mover for the configured difficulty.

use crate::difficulty::Difficulty;
use crate::error::GameError;
use crate::outcome::evaluate;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::RngCore;
use tracing::{info, instrument};

/// Chooses the computer's cell without touching the board.
///
/// Mark-agnostic: `computer_mark` need not be the side to move, which lets
/// callers ask "what would O play here" on any board.
///
/// # Errors
///
/// [`GameError::NoLegalMove`] on a full board.
#[instrument(skip(board, rng), fields(cells = %board.compact()))]
pub fn choose_computer_move(
    board: &Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    rng: &mut impl RngCore,
) -> Result<Position, GameError> {
    if board.is_full() {
        return Err(GameError::NoLegalMove);
    }
    difficulty.strategy().choose(board, computer_mark, rng)
}

/// Chooses the computer's cell and places its mark there.
///
/// # Errors
///
/// - [`GameError::NoLegalMove`] on a full board.
/// - [`GameError::GameOver`] if the board already has a winner.
/// - [`GameError::WrongTurn`] if `computer_mark` is not the side to move.
///
/// The board is unchanged on error.
#[instrument(skip(board, rng), fields(cells = %board.compact()))]
pub fn play_computer_move(
    board: &mut Board,
    difficulty: Difficulty,
    computer_mark: Mark,
    rng: &mut impl RngCore,
) -> Result<Position, GameError> {
    if board.is_full() {
        return Err(GameError::NoLegalMove);
    }
    if evaluate(board).is_terminal() {
        return Err(GameError::GameOver);
    }
    if board.to_move() != computer_mark {
        return Err(GameError::WrongTurn(computer_mark));
    }

    let position = choose_computer_move(board, difficulty, computer_mark, rng)?;
    board.apply_move(position, computer_mark)?;
    info!(%difficulty, mark = %computer_mark, %position, "Computer moved");
    Ok(position)
}

/// Returns a copy of `board` with `mark` at the raw cell `index`.
///
/// # Errors
///
/// [`GameError::OutOfBounds`], [`GameError::CellOccupied`] or
/// [`GameError::WrongTurn`].
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, GameError> {
    let position = Position::try_from(index)?;
    board.with_move(position, mark)
}
