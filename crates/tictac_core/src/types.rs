//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
///
/// X always moves first. Nothing in the evaluator or the movers assumes
/// which mark the computer plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> Option<char> {
        self.mark().map(|mark| match mark {
            Mark::X => 'X',
            Mark::O => 'O',
        })
    }
}

/// 3x3 tic-tac-toe board.
///
/// The mark counts always satisfy `x == o` or `x == o + 1`. Every
/// constructor and mutator that takes outside input checks this, so a
/// `Board` value is always one that a legal sequence of turns could reach
/// (ignoring whether play should have stopped at a win).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells, checking the turn invariant.
    #[instrument]
    pub fn from_cells(cells: [Cell; 9]) -> Result<Self, GameError> {
        let board = Self { cells };
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x == o || x == o + 1 {
            Ok(board)
        } else {
            Err(GameError::InvalidBoard(format!(
                "{} X marks and {} O marks cannot arise from alternating turns",
                x, o
            )))
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index (0-8).
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// The mark whose turn it is, derived from the mark counts.
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Empty positions in ascending index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Places `mark` at `pos`.
    ///
    /// Refuses occupied cells and marks placed out of turn; the board is
    /// left untouched on error.
    #[instrument(skip(self), fields(board = %self.compact()))]
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        if mark != self.to_move() {
            return Err(GameError::WrongTurn(mark));
        }
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Places `mark` at a raw index (0-8).
    pub fn apply_index(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        let pos = Position::try_from(index)?;
        self.apply_move(pos, mark)
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub fn with_move(mut self, pos: Position, mark: Mark) -> Result<Self, GameError> {
        self.apply_move(pos, mark)?;
        Ok(self)
    }

    /// Hypothetical placement for search. The caller guarantees `pos` is empty.
    pub(crate) fn placed(mut self, pos: Position, mark: Mark) -> Self {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        self
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Nine-character form, `_` for empty cells (e.g. `XX__O____`).
    pub fn compact(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.symbol().unwrap_or('_'))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<[Cell; 9]> for Board {
    type Error = GameError;

    fn try_from(cells: [Cell; 9]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Renders the board as a grid, empty cells showing their 1-9 number.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index].symbol() {
                    Some(symbol) => write!(f, "{}", symbol)?,
                    None => write!(f, "{}", index + 1)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cell symbols in row-major order.
///
/// `X`/`O` (any case) are marks; `_`, `.`, `-`, space and the digits 1-9
/// are empty. Row separators `|`, `/` and newlines are ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r'))
            .collect();
        if symbols.len() != 9 {
            return Err(GameError::InvalidBoard(format!(
                "expected 9 cells, found {}",
                symbols.len()
            )));
        }

        let mut cells = [Cell::Empty; 9];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '_' | '.' | '-' | ' ' | '1'..='9' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unknown cell symbol {:?}",
                        other
                    )));
                }
            };
        }
        Self::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        assert_eq!(board.to_move(), Mark::X);
        assert!(!board.is_full());
    }

    #[test]
    fn test_turns_alternate_from_counts() {
        let mut board = Board::new();
        board.apply_move(Position::Center, Mark::X).unwrap();
        assert_eq!(board.to_move(), Mark::O);
        board.apply_move(Position::TopLeft, Mark::O).unwrap();
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_refused() {
        let mut board = Board::new();
        board.apply_move(Position::Center, Mark::X).unwrap();
        let before = board;
        assert_eq!(
            board.apply_move(Position::Center, Mark::O),
            Err(GameError::CellOccupied(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_turn_mark_is_refused() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(Position::Center, Mark::O),
            Err(GameError::WrongTurn(Mark::O))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_index_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_index(9, Mark::X),
            Err(GameError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_parse_and_compact() {
        let board: Board = "XX__O____".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::O));
        assert_eq!(board.compact(), "XX__O____");
        assert_eq!(board.to_move(), Mark::O);

        let rows: Board = "xx_/_o_/___".parse().unwrap();
        assert_eq!(rows, board);
    }

    #[test]
    fn test_parse_rejects_impossible_counts() {
        assert!(matches!(
            "OO_______".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XXX______".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XO?______".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_clear_resets_board() {
        let mut board: Board = "XO_______".parse().unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }
}
