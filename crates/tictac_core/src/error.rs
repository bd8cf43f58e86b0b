//! Errors raised by the board, the movers and the game session.

use crate::position::Position;
use crate::types::Mark;

/// A refused operation.
///
/// Every variant is a caller error: the engine never retries, and the board
/// is left exactly as it was before the refused call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// A mover was asked to choose on a full board.
    #[display("No legal move: the board is full")]
    NoLegalMove,

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// A computer move was requested in a game without a computer player.
    #[display("This game has no computer opponent")]
    NoComputerOpponent,

    /// A board from outside input that no legal game could produce.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

impl std::error::Error for GameError {}
