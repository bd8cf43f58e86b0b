//! Win detection logic for tic-tac-toe.

use super::lines::WINNING_LINES;
use crate::types::{Board, Cell, Mark};

/// Checks if there is a winner on the board.
///
/// Scans all eight lines and returns the mark of the first line holding
/// three identical marks, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }

    None
}
