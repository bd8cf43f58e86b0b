//! Game outcome evaluation.

use crate::rules::{check_winner, is_full};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always derived from a [`Board`] on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty cell.
    Ongoing,
    /// X has three in a row.
    XWon,
    /// O has three in a row.
    OWon,
    /// Full board, no winner.
    Tie,
}

impl Outcome {
    /// The outcome in which `mark` has won.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWon,
            Mark::O => Outcome::OWon,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::Ongoing | Outcome::Tie => None,
        }
    }

    /// True for every outcome except [`Outcome::Ongoing`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::XWon => write!(f, "Player X won"),
            Outcome::OWon => write!(f, "Player O won"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Evaluates a board.
///
/// Wins are checked on all eight lines before the board is considered
/// full, so a winning final move is never reported as a tie.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::won_by(winner)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_diagonal_win_is_not_tie() {
        let board: Board = "XOXOXOXOX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_o_win() {
        let board: Board = "XXOXO_O__".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::OWon);
        assert_eq!(evaluate(&board).winner(), Some(Mark::O));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board: Board = "XX__O____".parse().unwrap();
        let copy = board;
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(board, copy);
    }
}
